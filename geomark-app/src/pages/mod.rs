mod geocoding;

pub use self::geocoding::*;
