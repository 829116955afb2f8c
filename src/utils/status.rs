use crate::config::{Config, FragmentPolicy};
use crate::utils::urls::{embed_url, large_map_url};
use comfy_table::{Attribute, Cell, CellAlignment, Table};

pub fn view_summary_table(config: &Config) -> Table {
    let fragment_found = config.fragment.is_file();
    let fragment_mark = match (fragment_found, config.fragment_policy) {
        (true, _) => "✅",
        (false, FragmentPolicy::Blank) => "⚠️",
        (false, FragmentPolicy::Fail) => "❌",
    };

    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Setting")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    let rows = [
        ("✅", "BBox", config.view.bbox.to_string()),
        (
            "✅",
            "Marker",
            format!("{}, {}", config.view.lat, config.view.lon),
        ),
        ("✅", "Refresh", format!("{}s", config.refresh_secs)),
        (
            fragment_mark,
            "Fragment",
            format!(
                "{} (on failure: {:?})",
                config.fragment.display(),
                config.fragment_policy
            ),
        ),
        ("✅", "Embed", embed_url(&config.base_url, &config.view)),
        ("✅", "Larger map", large_map_url(&config.base_url, &config.view)),
    ];
    for (mark, name, value) in rows {
        table.add_row(vec![
            Cell::new(mark).set_alignment(CellAlignment::Center),
            Cell::new(name),
            Cell::new(value),
        ]);
    }

    table
}

pub fn print_view_summary(config: &Config) {
    println!("\nMap view:\n{}", view_summary_table(config));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_urls() {
        let rendered = view_summary_table(&Config::default()).to_string();
        assert!(rendered.contains("-1,-1,1,1"));
        assert!(rendered.contains("layer=mapnik"));
        assert!(rendered.contains("layers=M"));
        assert!(rendered.contains("10s"));
    }

    #[test]
    fn test_summary_flags_missing_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            fragment: dir.path().join("common.html"),
            fragment_policy: FragmentPolicy::Fail,
            ..Config::default()
        };
        let rendered = view_summary_table(&config).to_string();
        assert!(rendered.contains("❌"));
        assert!(rendered.contains("Fail"));
    }
}
