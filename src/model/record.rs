// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// One error occurrence's diagnostic context, as supplied by the external
/// reporting source.
///
/// Every field is optional or defaulted: a sparse record is the normal case,
/// and absence of a field never faults — it only changes which groups and
/// sections the composer materializes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiagnosticRecord {
    pub request: Option<RequestInfo>,
    pub request_data: Option<RequestData>,
    #[serde(deserialize_with = "php_map::optional")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(deserialize_with = "php_map::required")]
    pub session: BTreeMap<String, Value>,
    #[serde(deserialize_with = "php_map::required")]
    pub cookies: BTreeMap<String, String>,
    pub route: Option<RouteInfo>,
    pub view: Option<ViewInfo>,
    pub livewire: Option<LivewireInfo>,
    #[serde(deserialize_with = "php_map::optional")]
    pub user: Option<BTreeMap<String, Value>>,
    pub git: Option<GitInfo>,
    #[serde(deserialize_with = "php_map::required")]
    pub env: BTreeMap<String, String>,
    pub exception: Option<ExceptionInfo>,
    pub custom_context_items: Vec<CustomContextItem>,
}

/// PHP serializes an empty associative array as `[]`, so a list where a map
/// is expected is the normal empty wire shape, never a fault. Any list in a
/// map position deserializes to an empty map.
mod php_map {
    use std::collections::BTreeMap;

    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire<V> {
        Map(BTreeMap<String, V>),
        List(Vec<IgnoredAny>),
    }

    impl<V> Wire<V> {
        fn into_map(self) -> BTreeMap<String, V> {
            match self {
                Self::Map(map) => map,
                Self::List(_) => BTreeMap::new(),
            }
        }
    }

    pub(super) fn required<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        Ok(Wire::deserialize(deserializer)?.into_map())
    }

    pub(super) fn optional<'de, D, V>(
        deserializer: D,
    ) -> Result<Option<BTreeMap<String, V>>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        Ok(Option::<Wire<V>>::deserialize(deserializer)?.map(Wire::into_map))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestInfo {
    pub url: String,
    pub method: String,
    pub ip: Option<String>,
    pub useragent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestData {
    #[serde(rename = "queryString", deserialize_with = "php_map::required")]
    pub query_string: BTreeMap<String, String>,
    pub body: Option<String>,
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RouteInfo {
    pub route: Option<String>,
    pub controller_action: Option<String>,
    pub middleware: Vec<String>,
    #[serde(deserialize_with = "php_map::required")]
    pub route_parameters: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewInfo {
    pub name: String,
    #[serde(deserialize_with = "php_map::required")]
    pub data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LivewireInfo {
    pub component_alias: Option<String>,
    pub component_class: Option<String>,
    pub component_id: Option<String>,
    pub updates: Vec<LivewireUpdate>,
    #[serde(deserialize_with = "php_map::required")]
    pub data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LivewireUpdate {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GitInfo {
    pub hash: Option<String>,
    pub message: Option<String>,
    pub tag: Option<String>,
    pub remote: Option<String>,
    pub is_dirty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExceptionInfo {
    pub class: Option<String>,
    pub message: Option<String>,
    pub trace: Option<String>,
    #[serde(deserialize_with = "php_map::required")]
    pub context: BTreeMap<String, Value>,
}

/// An externally supplied named bag of key/value items; rendered through the
/// same generic renderer as the Exception context.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CustomContextItem {
    pub name: String,
    #[serde(deserialize_with = "php_map::required")]
    pub items: BTreeMap<String, Value>,
}
