pub mod base64;
pub mod geoip;
pub mod hash;
pub mod jsonfmt;
pub mod md2html;
pub mod sqlfmt;
pub mod svg2react;
pub mod timestamp;
