//! Device check wire vocabulary and inspection payload
//!
//! Closed enums carry the canonical spellings used by the database plus
//! serde aliases for the legacy lowercase/camelCase spellings still sent
//! by older clients. Accepting both on input and always emitting the
//! canonical form replaces the two-way mapping passes older records
//! needed.

use serde::{Deserialize, Serialize};

/// Kind of device being inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    #[serde(rename = "PC", alias = "pc")]
    Pc,
    #[serde(alias = "laptop")]
    Laptop,
}

/// Who owns the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    #[serde(alias = "company")]
    Company,
    #[serde(alias = "personal")]
    Personal,
}

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsType {
    #[serde(alias = "windows")]
    Windows,
    #[serde(alias = "linux")]
    Linux,
    #[serde(alias = "mac")]
    Mac,
}

/// Software license classification, shared by the OS field and every
/// application entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum License {
    #[serde(alias = "original")]
    Original,
    #[serde(alias = "pirated")]
    Pirated,
    #[serde(rename = "Open Source", alias = "openSource", alias = "opensource")]
    OpenSource,
    #[serde(alias = "unknown")]
    Unknown,
}

/// Primary storage technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryType {
    #[serde(rename = "HDD", alias = "hdd")]
    Hdd,
    #[serde(rename = "SSD", alias = "ssd")]
    Ssd,
}

/// Overall verdict of the inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceSuitability {
    #[serde(alias = "suitable")]
    Suitable,
    #[serde(
        rename = "Limited Suitability",
        alias = "limitedSuitability",
        alias = "limitedsuitability"
    )]
    LimitedSuitability,
    #[serde(rename = "Needs Repair", alias = "needsRepair", alias = "needsrepair")]
    NeedsRepair,
    #[serde(alias = "unsuitable")]
    Unsuitable,
}

/// Antivirus running state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AntivirusStatus {
    #[serde(alias = "active")]
    Active,
    #[serde(alias = "inactive")]
    Inactive,
}

/// Presence flag used for VPN and password usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    #[serde(alias = "available")]
    Available,
    #[serde(rename = "Not Available", alias = "notAvailable", alias = "notavailable")]
    NotAvailable,
}

/// Frozen copy of employee identity fields captured at check creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSnapshot {
    pub full_name: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Hardware identity of the inspected device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetail {
    pub device_type: DeviceType,
    pub ownership: Ownership,
    pub device_brand: String,
    pub device_model: String,
    pub serial_number: String,
}

/// Operating system state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingSystem {
    pub os_type: OsType,
    pub os_version: String,
    pub os_license: License,
    #[serde(default)]
    pub os_regular_update: bool,
}

/// Optional hardware specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_capacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<MemoryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_capacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
}

/// Per-component condition ratings plus the overall verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCondition {
    pub device_suitability: DeviceSuitability,
    pub battery_suitability: String,
    pub keyboard_condition: String,
    pub touchpad_condition: String,
    pub monitor_condition: String,
    pub wifi_condition: String,
}

/// One installed application with its license classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationEntry {
    pub application_name: String,
    pub license: License,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One configured VPN with its license classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpnEntry {
    pub vpn_name: String,
    pub license: License,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Antivirus posture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AntivirusInfo {
    pub status: AntivirusStatus,
    #[serde(default)]
    pub list: Vec<ApplicationEntry>,
}

/// VPN posture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpnInfo {
    pub status: AvailabilityStatus,
    #[serde(default)]
    pub list: Vec<VpnEntry>,
}

/// Security posture of the device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub antivirus: AntivirusInfo,
    pub vpn: VpnInfo,
}

/// Trailing free-form section of the inspection form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInfo {
    pub password_usage: AvailabilityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_notes: Option<String>,
    #[serde(rename = "inspectorPICName", skip_serializing_if = "Option::is_none")]
    pub inspector_pic_name: Option<String>,
}
