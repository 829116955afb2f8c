use crate::models::view::MapViewRequest;
use crate::utils::urls::{embed_url, large_map_url};

const STYLESHEET_URL: &str = "https://www.w3schools.com/w3css/4/w3.css";

/// Builds the traffic page. Holds the fixed page settings; the view and the
/// shared fragment are passed per render.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    pub base_url: String,
    pub title: String,
    pub heading: String,
    pub refresh_secs: u32,
}

impl PageRenderer {
    /// Pure: the same view and fragment always produce the same bytes.
    pub fn render(&self, view: &MapViewRequest, fragment: &str) -> String {
        let embed = embed_url(&self.base_url, view);
        let large = large_map_url(&self.base_url, view);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
    <meta name="viewport" content="width=device-width, initial-scale=0.7">
    <meta http-equiv="refresh" content="{refresh}">
  </head>
  <body>
{fragment}
    <h1 style="color: blue">&nbsp;{heading}</h1>
    <form name="geo_ip" method="get" action="geo-ip.php">
      <iframe width="100%" height="90%" frameborder="0" scrolling="no" marginheight="0" marginwidth="0"
        src="{embed}" style="border: 1px solid black">
      </iframe>
      <br/>
      <small>
        <a href="{large}">View Larger Map</a>
      </small>
    </form>
  </body>
</html>
"#,
            title = html_escape::encode_text(&self.title),
            stylesheet = STYLESHEET_URL,
            refresh = self.refresh_secs,
            fragment = fragment,
            heading = html_escape::encode_text(&self.heading),
            embed = embed,
            large = large,
        )
    }
}
