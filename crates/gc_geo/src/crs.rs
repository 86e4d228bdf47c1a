// crates/gc_geo/src/crs.rs
//! 坐标参考系统别名解析
//!
//! 输出影像的投影字符串支持两类常用坐标系的简写别名：
//! WGS84 (EPSG:4326) 与 Web 墨卡托 (EPSG:3857)。别名命中时替换为
//! 内置的完整 WKT 定义，其余字符串视为自定义 WKT 原样透传。

use serde::{Deserialize, Serialize};

/// WGS84 坐标系 (EPSG:4326) 的完整 WKT
pub const WGS84_WKT: &str = r#"GEOGCS["WGS 84", DATUM["WGS_1984", SPHEROID["WGS 84", 6378137, 298.257223563, AUTHORITY["EPSG", "7030"]], AUTHORITY["EPSG", "6326"]], PRIMEM["Greenwich", 0, AUTHORITY["EPSG", "8901"]], UNIT["degree", 0.01745329251994328, AUTHORITY["EPSG", "9122"]], AUTHORITY["EPSG", "4326"]]"#;

/// Web 墨卡托 (EPSG:3857) 的完整 WKT
pub const WEB_MERCATOR_WKT: &str = r#"PROJCS["WGS 84 / Pseudo-Mercator",GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AUTHORITY["EPSG","4326"]],PROJECTION["Mercator_1SP"],PARAMETER["central_meridian",0],PARAMETER["scale_factor",1],PARAMETER["false_easting",0],PARAMETER["false_northing",0],UNIT["metre",1,AUTHORITY["EPSG","9001"]],AXIS["X",EAST],AXIS["Y",NORTH],EXTENSION["PROJ4","+proj=merc +a=6378137 +b=6378137 +lat_ts=0.0 +lon_0=0.0 +x_0=0.0 +y_0=0 +k=1.0 +units=m +nadgrids=@null +wktext  +no_defs"],AUTHORITY["EPSG","3857"]]"#;

/// 内置的常用坐标参考系统
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnownCrs {
    /// WGS84 地理坐标系 (EPSG:4326)
    Wgs84,
    /// Web 墨卡托投影坐标系 (EPSG:3857)
    WebMercator,
}

impl KnownCrs {
    /// 从别名解析（大小写不敏感）
    ///
    /// WGS84 族: `WGS84` / `wgs84` / `EPSG:4326` / `EPSG-4326` / `4326`；
    /// Web 墨卡托族: `EPSG:3857` / `EPSG-3857` / `3857`。
    #[must_use]
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias.trim().to_lowercase().as_str() {
            "wgs84" | "epsg:4326" | "epsg-4326" | "4326" => Some(KnownCrs::Wgs84),
            "epsg:3857" | "epsg-3857" | "3857" => Some(KnownCrs::WebMercator),
            _ => None,
        }
    }

    /// 完整 WKT 定义
    #[must_use]
    pub fn wkt(&self) -> &'static str {
        match self {
            KnownCrs::Wgs84 => WGS84_WKT,
            KnownCrs::WebMercator => WEB_MERCATOR_WKT,
        }
    }

    /// EPSG 代码
    #[must_use]
    pub fn epsg_code(&self) -> u32 {
        match self {
            KnownCrs::Wgs84 => 4326,
            KnownCrs::WebMercator => 3857,
        }
    }
}

/// 解析投影字符串
///
/// 别名命中时返回内置 WKT，否则原样返回输入（允许任意自定义 WKT）。
#[must_use]
pub fn resolve_projection(proj: &str) -> String {
    match KnownCrs::from_alias(proj) {
        Some(crs) => crs.wkt().to_string(),
        None => proj.to_string(),
    }
}

/// 从字符串提取 EPSG 代码
///
/// 支持 `EPSG:xxxx` 简写、WKT1 的 `AUTHORITY["EPSG","xxxx"]`
/// 以及 WKT2 的 `ID["EPSG",xxxx]`。WKT 中取最后一个 AUTHORITY 子句，
/// 即整体坐标系的权威代码而非椭球等内部对象的代码。
#[must_use]
pub fn parse_epsg(s: &str) -> Option<u32> {
    // 尝试从 "EPSG:xxxx" 格式解析
    if let Some(suffix) = s.strip_prefix("EPSG:") {
        return suffix.trim().parse().ok();
    }
    // 尝试从 WKT 的 AUTHORITY["EPSG", "xxxx"] 解析，逗号后允许空白
    if let Some(pos) = s.rfind("AUTHORITY[\"EPSG\",") {
        let rest = s[pos + 17..].trim_start();
        if let Some(inner) = rest.strip_prefix('"') {
            if let Some(end) = inner.find('"') {
                return inner[..end].parse().ok();
            }
        }
    }
    // 尝试从 ID["EPSG",xxxx] 解析（WKT2 格式）
    if let Some(pos) = s.rfind("ID[\"EPSG\",") {
        let start = pos + 10;
        if let Some(end) = s[start..].find(']') {
            return s[start..start + end].trim().parse().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_wgs84_family() {
        assert_eq!(KnownCrs::from_alias("WGS84"), Some(KnownCrs::Wgs84));
        assert_eq!(KnownCrs::from_alias("wgs84"), Some(KnownCrs::Wgs84));
        assert_eq!(KnownCrs::from_alias("EPSG:4326"), Some(KnownCrs::Wgs84));
        assert_eq!(KnownCrs::from_alias("epsg:4326"), Some(KnownCrs::Wgs84));
        assert_eq!(KnownCrs::from_alias("EPSG-4326"), Some(KnownCrs::Wgs84));
        assert_eq!(KnownCrs::from_alias("4326"), Some(KnownCrs::Wgs84));
    }

    #[test]
    fn test_alias_web_mercator_family() {
        assert_eq!(KnownCrs::from_alias("EPSG:3857"), Some(KnownCrs::WebMercator));
        assert_eq!(KnownCrs::from_alias("EPSG-3857"), Some(KnownCrs::WebMercator));
        assert_eq!(KnownCrs::from_alias("3857"), Some(KnownCrs::WebMercator));
    }

    #[test]
    fn test_alias_resolution_is_identical() {
        // 同族别名解析到完全相同的 WKT
        assert_eq!(resolve_projection("EPSG:4326"), resolve_projection("wgs84"));
        assert_eq!(resolve_projection("EPSG:4326"), WGS84_WKT);
    }

    #[test]
    fn test_unknown_string_passthrough() {
        let custom = r#"PROJCS["My Custom CRS"]"#;
        assert_eq!(resolve_projection(custom), custom);
        assert_eq!(KnownCrs::from_alias(custom), None);
    }

    #[test]
    fn test_parse_epsg_shorthand() {
        assert_eq!(parse_epsg("EPSG:4326"), Some(4326));
        assert_eq!(parse_epsg("EPSG: 32650"), Some(32650));
        assert_eq!(parse_epsg("EPSG:abc"), None);
    }

    #[test]
    fn test_parse_epsg_wkt1_authority() {
        let wkt = r#"GEOGCS["WGS 84",AUTHORITY["EPSG","4326"]]"#;
        assert_eq!(parse_epsg(wkt), Some(4326));
    }

    #[test]
    fn test_parse_epsg_takes_outermost_authority() {
        // 内置 WKT 含多个 AUTHORITY 子句（椭球、基准面等），
        // 应取最后一个，即坐标系整体的代码
        assert_eq!(parse_epsg(WGS84_WKT), Some(4326));
        assert_eq!(parse_epsg(WEB_MERCATOR_WKT), Some(3857));
    }

    #[test]
    fn test_parse_epsg_wkt2_id() {
        let wkt2 = r#"GEOGCRS["WGS 84",ID["EPSG",4326]]"#;
        assert_eq!(parse_epsg(wkt2), Some(4326));
    }

    #[test]
    fn test_known_crs_epsg_code() {
        assert_eq!(KnownCrs::Wgs84.epsg_code(), 4326);
        assert_eq!(KnownCrs::WebMercator.epsg_code(), 3857);
    }
}
