//! Device path composition
//!
//! IoTDB addresses a device as `root.<group>.<tag values...>.<device>` and a
//! single series as `<device path>.<sensor>`. Every identifier that ends up in
//! generated SQL goes through this module. Nothing is escaped: group, tag and
//! device names must not contain `.` or quote characters.

use super::types::{DeviceSchema, Sensor};

/// Label of the storage root every path starts from
pub const ROOT_SERIES_NAME: &str = "root";

/// Separator between path levels
pub const PATH_SEPARATOR: char = '.';

/// Build the fully-qualified path of a device
///
/// Tag *values* are appended in key order; tag keys never appear in the path.
pub fn device_path(schema: &DeviceSchema) -> String {
    let mut path = String::from(ROOT_SERIES_NAME);
    push_level(&mut path, &schema.group);
    for value in schema.tags.values() {
        push_level(&mut path, value);
    }
    push_level(&mut path, &schema.device);
    path
}

/// Build the fully-qualified path of one sensor on a device
pub fn series_path(schema: &DeviceSchema, sensor: &Sensor) -> String {
    let mut path = device_path(schema);
    push_level(&mut path, &sensor.name);
    path
}

fn push_level(path: &mut String, level: &str) {
    path.push(PATH_SEPARATOR);
    path.push_str(level);
}
