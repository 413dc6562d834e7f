//! Instruction set for the generated Leaflet script.
//!
//! Rendering first builds a list of [`JsCall`] values, then serializes the
//! whole list in one pass. Keeping the script as data until the end makes
//! the emission order checkable without string surgery.

use std::fmt;

/// One JavaScript value inside an emitted call.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    /// Bare numeric literal.
    Num(f64),
    /// Single-quoted string literal. The text is embedded as-is; nothing in
    /// the generated script is ever escaped.
    Str(String),
    /// Raw text spliced into the argument position, such as a previously
    /// bound variable or a verbatim GeoJSON payload.
    Raw(String),
    /// `[a, b, c]`
    Array(Vec<JsValue>),
    /// `{key: value, ...}` with keys in insertion order.
    Object(JsOptions),
}

impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Num(n) => write!(f, "{}", n),
            JsValue::Str(s) => write!(f, "'{}'", s),
            JsValue::Raw(s) => f.write_str(s),
            JsValue::Array(items) => {
                f.write_str("[")?;
                write_list(f, items)?;
                f.write_str("]")
            }
            JsValue::Object(options) => options.fmt(f),
        }
    }
}

/// Ordered key/value pairs rendered as a JavaScript object literal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsOptions(Vec<(&'static str, JsValue)>);

impl JsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry.
    pub fn set(mut self, key: &'static str, value: JsValue) -> Self {
        self.0.push((key, value));
        self
    }

    /// Appends one entry only when a value is present.
    pub fn set_opt(mut self, key: &'static str, value: Option<JsValue>) -> Self {
        if let Some(value) = value {
            self.0.push((key, value));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for JsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}

/// One emitted statement: an optional `var` binding, a call, a method chain
/// and the closing `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsCall {
    binding: Option<String>,
    constructed: bool,
    function: String,
    args: Vec<JsValue>,
    chain: Vec<(String, Vec<JsValue>)>,
}

impl JsCall {
    /// A call to `function`, e.g. `L.marker`.
    pub fn function(function: impl Into<String>) -> Self {
        Self {
            binding: None,
            constructed: false,
            function: function.into(),
            args: Vec::new(),
            chain: Vec::new(),
        }
    }

    /// Binds the result to `var name`.
    pub fn bind(mut self, name: impl Into<String>) -> Self {
        self.binding = Some(name.into());
        self
    }

    /// Prefixes the call with the `new` keyword.
    pub fn constructed(mut self) -> Self {
        self.constructed = true;
        self
    }

    /// Appends one argument.
    pub fn arg(mut self, value: JsValue) -> Self {
        self.args.push(value);
        self
    }

    /// Chains a method call onto the result.
    pub fn method(mut self, name: impl Into<String>, args: Vec<JsValue>) -> Self {
        self.chain.push((name.into(), args));
        self
    }
}

impl fmt::Display for JsCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(binding) = &self.binding {
            write!(f, "var {} = ", binding)?;
        }
        if self.constructed {
            f.write_str("new ")?;
        }
        write!(f, "{}(", self.function)?;
        write_list(f, &self.args)?;
        f.write_str(")")?;
        for (method, args) in &self.chain {
            write!(f, ".{}(", method)?;
            write_list(f, args)?;
            f.write_str(")")?;
        }
        f.write_str(";")
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, values: &[JsValue]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

/// Serializes the instruction list, one statement per line.
pub fn serialize(calls: &[JsCall]) -> String {
    let mut out = String::new();
    for call in calls {
        out.push_str(&call.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_drop_trailing_zero() {
        assert_eq!(JsValue::Num(40.0).to_string(), "40");
        assert_eq!(JsValue::Num(-3.5).to_string(), "-3.5");
        assert_eq!(JsValue::Num(100.0).to_string(), "100");
    }

    #[test]
    fn test_values() {
        assert_eq!(JsValue::Str("red".to_string()).to_string(), "'red'");
        assert_eq!(JsValue::Raw("map".to_string()).to_string(), "map");
        let pair = JsValue::Array(vec![JsValue::Num(40.0), JsValue::Num(-3.0)]);
        assert_eq!(pair.to_string(), "[40, -3]");
    }

    #[test]
    fn test_options_keep_insertion_order() {
        let options = JsOptions::new()
            .set("color", JsValue::Str("red".to_string()))
            .set("radius", JsValue::Num(100.0))
            .set_opt("onClickText", None);
        assert_eq!(options.to_string(), "{color: 'red', radius: 100}");
    }

    #[test]
    fn test_call_with_binding_and_chain() {
        let call = JsCall::function("L.marker")
            .bind("marker0")
            .arg(JsValue::Array(vec![JsValue::Num(40.0), JsValue::Num(-3.0)]))
            .method("bindTooltip", vec![JsValue::Str("home".to_string())])
            .method("addTo", vec![JsValue::Raw("map".to_string())]);
        assert_eq!(
            call.to_string(),
            "var marker0 = L.marker([40, -3]).bindTooltip('home').addTo(map);"
        );
    }

    #[test]
    fn test_multi_value_argument_lists() {
        let call = JsCall::function("map.setView")
            .arg(JsValue::Array(vec![JsValue::Num(40.4), JsValue::Num(-3.7)]))
            .arg(JsValue::Num(12.0))
            .method(
                "on",
                vec![
                    JsValue::Str("click".to_string()),
                    JsValue::Raw("onClickShowDiv".to_string()),
                ],
            );
        assert_eq!(
            call.to_string(),
            "map.setView([40.4, -3.7], 12).on('click', onClickShowDiv);"
        );
    }

    #[test]
    fn test_constructed_call() {
        let call = JsCall::function("L.FeatureGroup")
            .constructed()
            .bind("drawnItems")
            .arg(JsValue::Array(vec![
                JsValue::Raw("marker0".to_string()),
                JsValue::Raw("circle0".to_string()),
            ]));
        assert_eq!(
            call.to_string(),
            "var drawnItems = new L.FeatureGroup([marker0, circle0]);"
        );
    }

    #[test]
    fn test_serialize_one_statement_per_line() {
        let calls = vec![
            JsCall::function("L.map").bind("map").arg(JsValue::Str("map".to_string())),
            JsCall::function("map.setView")
                .arg(JsValue::Array(vec![JsValue::Num(40.0), JsValue::Num(-3.0)]))
                .arg(JsValue::Num(15.0)),
        ];
        assert_eq!(
            serialize(&calls),
            "var map = L.map('map');\nmap.setView([40, -3], 15);\n"
        );
    }
}
