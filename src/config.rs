use crate::models::view::{BoundingBox, MapViewRequest};
use crate::utils::urls::{OSM_EMBED_URL, parse_base_url};
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// What to do when the shared fragment cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FragmentPolicy {
    /// Log a warning and render the page without the fragment.
    #[default]
    Blank,
    /// Answer with 500 Internal Server Error.
    Fail,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    pub view: MapViewRequest,
    pub fragment: PathBuf,
    pub fragment_policy: FragmentPolicy,
    pub refresh_secs: u32,
    pub title: String,
    pub heading: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            base_url: OSM_EMBED_URL.to_string(),
            view: MapViewRequest::default(),
            fragment: PathBuf::from("common.html"),
            fragment_policy: FragmentPolicy::Blank,
            refresh_secs: 10,
            title: "softhub traffic".to_string(),
            heading: "softhub access log".to_string(),
        }
    }
}

/// Serve an auto-refreshing page with an embedded map.
#[derive(Debug, Parser)]
#[command(name = "trafficmap", version, about)]
pub struct Cli {
    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Map embedding service used for both the iframe and the larger map link.
    #[arg(long = "base-url", value_name = "URL", default_value = OSM_EMBED_URL)]
    pub base_url: String,

    /// Visible extent as west,south,east,north.
    #[arg(long, value_name = "W,S,E,N", default_value = "-1,-1,1,1", allow_hyphen_values = true)]
    pub bbox: BoundingBox,

    /// Marker latitude.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub lat: f64,

    /// Marker longitude.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub lon: f64,

    /// Shared header fragment inlined at the top of the page.
    #[arg(long, value_name = "PATH", default_value = "common.html")]
    pub fragment: PathBuf,

    /// Behaviour when the fragment cannot be read.
    #[arg(long = "fragment-policy", value_enum, default_value_t = FragmentPolicy::Blank)]
    pub fragment_policy: FragmentPolicy,

    /// Client side refresh interval in seconds.
    #[arg(long = "refresh", value_name = "SECS", default_value_t = 10)]
    pub refresh_secs: u32,

    /// Page title.
    #[arg(long, default_value = "softhub traffic")]
    pub title: String,

    /// Heading shown above the map.
    #[arg(long, default_value = "softhub access log")]
    pub heading: String,
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> anyhow::Result<Self> {
        let view = MapViewRequest::new(cli.bbox, cli.lat, cli.lon)?;
        let base_url = parse_base_url(&cli.base_url)?;
        if cli.refresh_secs == 0 {
            anyhow::bail!("--refresh must be at least 1 second");
        }

        Ok(Config {
            host: cli.host,
            port: cli.port,
            base_url,
            view,
            fragment: cli.fragment,
            fragment_policy: cli.fragment_policy,
            refresh_secs: cli.refresh_secs,
            title: cli.title,
            heading: cli.heading,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Config> {
        let cli = Cli::try_parse_from(std::iter::once("trafficmap").chain(args.iter().copied()))?;
        Config::try_from(cli)
    }

    #[test]
    fn test_no_args_matches_default_config() {
        let parsed = parse(&[]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.host, default.host);
        assert_eq!(parsed.port, default.port);
        assert_eq!(parsed.base_url, default.base_url);
        assert_eq!(parsed.view, default.view);
        assert_eq!(parsed.fragment, default.fragment);
        assert_eq!(parsed.fragment_policy, default.fragment_policy);
        assert_eq!(parsed.refresh_secs, default.refresh_secs);
        assert_eq!(parsed.title, default.title);
        assert_eq!(parsed.heading, default.heading);
    }

    #[test]
    fn test_view_flags() {
        let config = parse(&[
            "--bbox", "-10,-5,10,5", "--lat", "-3.5", "--lon", "7.25",
        ])
        .unwrap();
        assert_eq!(config.view.bbox, BoundingBox::from((-10.0, -5.0, 10.0, 5.0)));
        assert_eq!(config.view.lat, -3.5);
        assert_eq!(config.view.lon, 7.25);
    }

    #[test]
    fn test_server_flags() {
        let config = parse(&[
            "--host",
            "127.0.0.1",
            "-p",
            "9090",
            "--fragment",
            "/srv/www/common.html",
            "--fragment-policy",
            "fail",
            "--refresh",
            "30",
        ])
        .unwrap();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 9090);
        assert_eq!(config.fragment, PathBuf::from("/srv/www/common.html"));
        assert_eq!(config.fragment_policy, FragmentPolicy::Fail);
        assert_eq!(config.refresh_secs, 30);
    }

    #[test]
    fn test_rejects_invalid_view() {
        assert!(parse(&["--bbox", "1,2,3"]).is_err());
        assert!(parse(&["--lat", "95"]).is_err());
        assert!(parse(&["--lon", "-200"]).is_err());
    }

    #[test]
    fn test_rejects_zero_refresh_and_empty_base_url() {
        assert!(parse(&["--refresh", "0"]).is_err());
        assert!(parse(&["--base-url", " "]).is_err());
    }

    #[test]
    fn test_rejects_base_url_that_would_break_the_page() {
        assert!(parse(&["--base-url", r#"https://x/embed.html?a=1" onload="alert(1)"#]).is_err());
        assert!(parse(&["--base-url", "https://x/embed.html?a=1"]).is_err());
        assert!(parse(&["--base-url", "https://x/embed.html#map"]).is_err());
        assert!(parse(&["--base-url", "file:///etc/passwd"]).is_err());
    }

    #[test]
    fn test_accepts_custom_base_url() {
        let config = parse(&["--base-url", "http://tiles.local:8080/export/embed.html"]).unwrap();
        assert_eq!(config.base_url, "http://tiles.local:8080/export/embed.html");
    }
}
