//! GeoTIFF georeferencing: projected bounds from the model tags and their WGS 84 extent.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use proj4rs::Proj;
use serde_json::{json, Value};
use tiff::decoder::Decoder;
use tiff::tags::Tag;
use tiff::TiffResult;

const GEOGRAPHIC_TYPE_KEY: u16 = 2048;
const PROJECTED_CS_TYPE_KEY: u16 = 3072;
/// GeoKey value meaning "user defined", which carries no EPSG code.
const USER_DEFINED: u16 = 32767;
const WGS84_GEOGRAPHIC: u16 = 4326;
const WGS84_LONGLAT: &str = "+proj=longlat +datum=WGS84 +no_defs";

const MGI_TOWGS84: &str = "+towgs84=577.326,90.129,463.919,5.137,1.474,5.297,2.4232";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Bounds {
    pub fn to_json(&self) -> Value {
        json!({
            "xmin": self.xmin,
            "ymin": self.ymin,
            "xmax": self.xmax,
            "ymax": self.ymax,
        })
    }
}

/// Placement of a north-up raster in its model coordinate system.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoReference {
    pub epsg: Option<u16>,
    /// Pixel size in model units as `(x, y)`.
    pub pixel_size: (f64, f64),
    pub width: u32,
    pub height: u32,
    pub bounds: Bounds,
}

impl GeoReference {
    pub fn crs(&self) -> Option<String> {
        self.epsg.map(|code| format!("EPSG:{code}"))
    }

    /// Bounds in WGS 84 degrees, from the four projected corners.
    /// `None` when the coordinate system is unknown or the transform fails.
    pub fn bounds_latlon(&self) -> Option<Bounds> {
        let code = self.epsg?;
        if code == WGS84_GEOGRAPHIC {
            return Some(self.bounds);
        }
        let source = Proj::from_proj_string(&proj_definition(code)?).ok()?;
        let target = Proj::from_proj_string(WGS84_LONGLAT).ok()?;

        let b = self.bounds;
        let mut lons = Vec::with_capacity(4);
        let mut lats = Vec::with_capacity(4);
        for (x, y) in [(b.xmin, b.ymin), (b.xmin, b.ymax), (b.xmax, b.ymin), (b.xmax, b.ymax)] {
            let mut point = (x, y, 0.0);
            proj4rs::transform::transform(&source, &target, &mut point).ok()?;
            lons.push(point.0.to_degrees());
            lats.push(point.1.to_degrees());
        }
        Some(Bounds {
            xmin: lons.iter().copied().fold(f64::INFINITY, f64::min),
            ymin: lats.iter().copied().fold(f64::INFINITY, f64::min),
            xmax: lons.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            ymax: lats.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

/// Read the model tags of a GeoTIFF. `Ok(None)` when the file has no pixel
/// scale or tie point; non-TIFF files are an error.
pub fn read_georeference(path: &Path) -> TiffResult<Option<GeoReference>> {
    let mut decoder = Decoder::new(BufReader::new(File::open(path)?))?;
    let (width, height) = decoder.dimensions()?;

    let scale = match decoder.find_tag(Tag::ModelPixelScaleTag)? {
        Some(value) => value.into_f64_vec()?,
        None => return Ok(None),
    };
    let tiepoint = match decoder.find_tag(Tag::ModelTiepointTag)? {
        Some(value) => value.into_f64_vec()?,
        None => return Ok(None),
    };
    if scale.len() < 2 || tiepoint.len() < 6 {
        return Ok(None);
    }
    let keys = match decoder.find_tag(Tag::GeoKeyDirectoryTag)? {
        Some(value) => value.into_u16_vec()?,
        None => Vec::new(),
    };

    let (sx, sy) = (scale[0], scale[1]);
    // Tie point maps raster (i, j) to model (x, y).
    let left = tiepoint[3] - tiepoint[0] * sx;
    let top = tiepoint[4] + tiepoint[1] * sy;
    let bounds = Bounds {
        xmin: left,
        ymin: top - f64::from(height) * sy,
        xmax: left + f64::from(width) * sx,
        ymax: top,
    };

    Ok(Some(GeoReference {
        epsg: epsg_code(&keys),
        pixel_size: (sx, sy),
        width,
        height,
        bounds,
    }))
}

/// Inline value of a GeoKey; keys stored in the double or ASCII params are skipped.
fn geo_key(keys: &[u16], id: u16) -> Option<u16> {
    keys.get(4..)?
        .chunks_exact(4)
        .find(|entry| entry[0] == id && entry[1] == 0)
        .map(|entry| entry[3])
}

fn epsg_code(keys: &[u16]) -> Option<u16> {
    [PROJECTED_CS_TYPE_KEY, GEOGRAPHIC_TYPE_KEY]
        .into_iter()
        .filter_map(|id| geo_key(keys, id))
        .find(|code| *code != 0 && *code != USER_DEFINED)
}

/// proj string for the coordinate systems the aerial datasets ship in:
/// WGS 84 and NAD83 UTM zones, and the Austrian MGI grids.
fn proj_definition(code: u16) -> Option<String> {
    let definition = match code {
        32601..=32660 => format!("+proj=utm +zone={} +datum=WGS84 +units=m +no_defs", code - 32600),
        32701..=32760 => format!(
            "+proj=utm +zone={} +south +datum=WGS84 +units=m +no_defs",
            code - 32700
        ),
        26901..=26923 => format!(
            "+proj=utm +zone={} +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
            code - 26900
        ),
        31254 => mgi_gauss_kruger("10.33333333333333"),
        31255 => mgi_gauss_kruger("13.33333333333333"),
        31256 => mgi_gauss_kruger("16.33333333333333"),
        31287 => format!(
            "+proj=lcc +lat_1=49 +lat_2=46 +lat_0=47.5 +lon_0=13.33333333333333 \
             +x_0=400000 +y_0=400000 +ellps=bessel {MGI_TOWGS84} +units=m +no_defs"
        ),
        _ => return None,
    };
    Some(definition)
}

fn mgi_gauss_kruger(lon_0: &str) -> String {
    format!(
        "+proj=tmerc +lat_0=0 +lon_0={lon_0} +k=1 +x_0=0 +y_0=-5000000 \
         +ellps=bessel {MGI_TOWGS84} +units=m +no_defs"
    )
}
