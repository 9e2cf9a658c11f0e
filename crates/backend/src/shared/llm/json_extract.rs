use contracts::usecases::u508_ai_insights::RAW_FIELD;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Первый блок кода в markdown, с необязательной меткой `json`
static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)```").expect("code fence regex"));

/// Достать JSON из текстового ответа модели.
///
/// Если в тексте есть блок ```` ``` ````, разбирается его содержимое,
/// иначе весь текст. При неудаче возвращается `{"raw": <text>}`:
/// ответ модели не теряется и запрос не считается ошибкой.
pub fn extract_json(text: &str) -> Value {
    let candidate = CODE_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|inner| !inner.is_empty())
        .unwrap_or(text);

    match serde_json::from_str::<Value>(candidate) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Model response is not JSON ({}), returning raw text", e);
            raw_value(text)
        }
    }
}

fn raw_value(text: &str) -> Value {
    let mut obj = Map::new();
    obj.insert(RAW_FIELD.to_string(), Value::String(text.to_string()));
    Value::Object(obj)
}
