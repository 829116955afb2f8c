use crate::error::TrafficError;
use std::fmt;
use std::str::FromStr;

/// Map extent in degrees, ordered the way the embed service expects it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl From<(f64, f64, f64, f64)> for BoundingBox {
    fn from(extent: (f64, f64, f64, f64)) -> Self {
        BoundingBox {
            west: extent.0,
            south: extent.1,
            east: extent.2,
            north: extent.3,
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        BoundingBox::from((-1.0, -1.0, 1.0, 1.0))
    }
}

impl BoundingBox {
    pub fn validate(&self) -> Result<(), TrafficError> {
        check_lon("bbox west", self.west)?;
        check_lon("bbox east", self.east)?;
        check_lat("bbox south", self.south)?;
        check_lat("bbox north", self.north)?;

        // west > east crosses the antimeridian and is allowed
        if self.south > self.north {
            return Err(TrafficError::InvalidView(format!(
                "bbox south ({}) lies above north ({})",
                self.south, self.north
            )));
        }
        Ok(())
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

impl FromStr for BoundingBox {
    type Err = TrafficError;

    /// Parses `west,south,east,north`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(TrafficError::InvalidView(format!(
                "bbox needs 4 comma separated values (west,south,east,north), got {}",
                parts.len()
            )));
        }

        let mut values = [0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|e| TrafficError::InvalidView(format!("bbox value '{}': {}", part, e)))?;
        }

        let bbox = BoundingBox::from((values[0], values[1], values[2], values[3]));
        bbox.validate()?;
        Ok(bbox)
    }
}

/// Everything needed to point the embedded map somewhere: the visible extent
/// and where to drop the marker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapViewRequest {
    pub bbox: BoundingBox,
    pub lat: f64,
    pub lon: f64,
}

impl MapViewRequest {
    pub fn new(bbox: BoundingBox, lat: f64, lon: f64) -> Result<Self, TrafficError> {
        let view = MapViewRequest { bbox, lat, lon };
        view.validate()?;
        Ok(view)
    }

    pub fn validate(&self) -> Result<(), TrafficError> {
        self.bbox.validate()?;
        check_lat("lat", self.lat)?;
        check_lon("lon", self.lon)
    }
}

fn check_lat(name: &str, value: f64) -> Result<(), TrafficError> {
    if value.is_finite() && (-90.0..=90.0).contains(&value) {
        Ok(())
    } else {
        Err(TrafficError::InvalidView(format!(
            "{} must be within [-90, 90], got {}",
            name, value
        )))
    }
}

fn check_lon(name: &str, value: f64) -> Result<(), TrafficError> {
    if value.is_finite() && (-180.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(TrafficError::InvalidView(format!(
            "{} must be within [-180, 180], got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bbox_displays_as_integers() {
        assert_eq!(BoundingBox::default().to_string(), "-1,-1,1,1");
    }

    #[test]
    fn test_fractional_bbox_display() {
        let bbox = BoundingBox::from((8.5, 47.25, 8.75, 47.5));
        assert_eq!(bbox.to_string(), "8.5,47.25,8.75,47.5");
    }

    #[test]
    fn test_parse_bbox_tolerates_whitespace() {
        let bbox: BoundingBox = " -1, -1 ,1,1 ".parse().unwrap();
        assert_eq!(bbox, BoundingBox::default());
    }

    #[test]
    fn test_parse_bbox_rejects_wrong_component_count() {
        assert!("1,2,3".parse::<BoundingBox>().is_err());
        assert!("1,2,3,4,5".parse::<BoundingBox>().is_err());
        assert!("".parse::<BoundingBox>().is_err());
    }

    #[test]
    fn test_parse_bbox_rejects_non_numeric_and_non_finite() {
        assert!("a,-1,1,1".parse::<BoundingBox>().is_err());
        assert!("NaN,-1,1,1".parse::<BoundingBox>().is_err());
        assert!("-1,-1,inf,1".parse::<BoundingBox>().is_err());
    }

    #[test]
    fn test_parse_bbox_rejects_inverted_latitudes() {
        let err = "-1,1,1,-1".parse::<BoundingBox>().unwrap_err();
        assert!(matches!(err, TrafficError::InvalidView(_)));
    }

    #[test]
    fn test_parse_bbox_accepts_antimeridian_crossing() {
        let bbox: BoundingBox = "170,-10,-170,10".parse().unwrap();
        assert_eq!(bbox.west, 170.0);
        assert_eq!(bbox.east, -170.0);
    }

    #[test]
    fn test_view_rejects_out_of_range_marker() {
        let bbox = BoundingBox::default();
        assert!(MapViewRequest::new(bbox, 91.0, 0.0).is_err());
        assert!(MapViewRequest::new(bbox, 0.0, -180.5).is_err());
        assert!(MapViewRequest::new(bbox, f64::NAN, 0.0).is_err());
        assert!(MapViewRequest::new(bbox, 45.0, 120.0).is_ok());
    }

    #[test]
    fn test_default_view_is_valid() {
        let view = MapViewRequest::default();
        assert!(view.validate().is_ok());
        assert_eq!(view.lat, 0.0);
        assert_eq!(view.lon, 0.0);
    }
}
