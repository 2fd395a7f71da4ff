use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// 统一校验必填字段：缺失、`null` 或空字符串均视为缺失
pub(crate) fn require<'a>(
    payload: &'a Value,
    entity: &'static str,
    fields: &[&str],
) -> Result<&'a Map<String, Value>> {
    let map = payload
        .as_object()
        .ok_or(Error::MissingProperty { entity })?;

    if fields.iter().any(|f| is_absent(map.get(*f))) {
        return Err(Error::MissingProperty { entity });
    }
    Ok(map)
}

pub(crate) fn text(map: &Map<String, Value>, entity: &'static str, field: &str) -> Result<String> {
    map.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(Error::InvalidTypeProperty { entity })
}

fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
