//! Typed access to configuration variables

use envref_core::coerce::{self, decode_json, split_list};
use envref_core::store::Vars;
use envref_core::{parse_mode, EnvrefError, Result, Store, StoreRegistry};
use envref_types::{ArrayValue, PrefixedGroup, StoreMode, TypedValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::EnvConfig;
use crate::loader::{LoadReport, Loader};

/// Configuration variables backed by a [`StoreRegistry`]
///
/// Every operation reads and writes the store of the active mode unless it
/// takes an explicit mode. Values are coerced on read; stores only ever
/// hold strings.
pub struct Env {
    stores: StoreRegistry,
    mode: StoreMode,
    override_existing: bool,
    loader: Loader,
}

impl Env {
    /// Create an environment from the default configuration
    pub fn new() -> Self {
        Self::with_config(&EnvConfig::default())
    }

    pub fn with_config(config: &EnvConfig) -> Self {
        Self {
            stores: config.registry(),
            mode: config.default_mode,
            override_existing: config.override_existing,
            loader: Loader::new(),
        }
    }

    /// Create an environment over an existing registry
    pub fn with_registry(stores: StoreRegistry) -> Self {
        Self {
            stores,
            mode: StoreMode::default(),
            override_existing: false,
            loader: Loader::new(),
        }
    }

    /// The active mode
    pub fn mode(&self) -> StoreMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: StoreMode) {
        self.mode = mode;
    }

    /// Switch mode by name; unknown names are ignored
    pub fn set_mode_named(&mut self, name: &str) {
        match parse_mode(name) {
            Ok(mode) => self.mode = mode,
            Err(err) => warn!(%err, "Ignoring unknown store mode"),
        }
    }

    /// Switch mode by numeric code; unknown codes are ignored
    pub fn set_mode_code(&mut self, code: u8) {
        match StoreMode::from_code(code) {
            Some(mode) => self.mode = mode,
            None => warn!(code, "Ignoring unknown store mode code"),
        }
    }

    /// Store for `mode`, or the active one
    pub fn store(&self, mode: Option<StoreMode>) -> &dyn Store {
        self.stores.store(mode.unwrap_or(self.mode))
    }

    pub fn store_mut(&mut self, mode: Option<StoreMode>) -> &mut dyn Store {
        self.stores.store_mut(mode.unwrap_or(self.mode))
    }

    /// Load definition files
    ///
    /// The active mode becomes `mode`, or [`StoreMode::Env`] when none is
    /// given, and stays that way after the call.
    pub fn load<I>(
        &mut self,
        paths: I,
        override_existing: bool,
        mode: Option<StoreMode>,
    ) -> Result<LoadReport>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        self.mode = mode.unwrap_or_default();
        let store = self.stores.store_mut(self.mode);
        self.loader.load(store, paths, override_existing)
    }

    /// Load definition files with the configured override policy and active mode
    pub fn load_files<I>(&mut self, paths: I) -> Result<LoadReport>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let store = self.stores.store_mut(self.mode);
        self.loader.load(store, paths, self.override_existing)
    }

    /// Every variable in the store for `mode`, or the active one
    pub fn read_all(&self, mode: Option<StoreMode>) -> Vars {
        self.store(mode).get_all()
    }

    /// Typed value with JSON and list decoding
    ///
    /// A missing, blank or `null` variable gives `default`.
    pub fn get(&self, name: &str, default: TypedValue) -> TypedValue {
        coerce::typed(self.raw(name).as_deref(), default)
    }

    /// Scalar value: numbers, booleans and `null`, otherwise the trimmed string
    ///
    /// A missing or blank variable gives `default`.
    pub fn get_env(&self, name: &str, default: TypedValue) -> TypedValue {
        coerce::scalar(self.raw(name).as_deref(), default)
    }

    /// Set a variable in the active store
    ///
    /// Without `override_existing`, a variable that already has a non-null
    /// value is left alone. Returns whether anything was written.
    pub fn set_env(
        &mut self,
        name: &str,
        value: impl Into<TypedValue>,
        override_existing: bool,
    ) -> bool {
        if !override_existing && !self.get_env(name, TypedValue::Null).is_null() {
            debug!(name, "Keeping existing value");
            return false;
        }

        let raw = value.into().to_raw_string();
        self.store_mut(None).set(name, &raw);
        true
    }

    /// Scalar value that must be present and non-null
    pub fn require_env(&self, name: &str) -> Result<TypedValue> {
        match self.get_env(name, TypedValue::Null) {
            TypedValue::Null => Err(EnvrefError::MissingRequiredVariable(name.to_string())),
            value => Ok(value),
        }
    }

    /// Decoded JSON object or array, or `default`
    pub fn get_json(&self, name: &str, default: Value) -> Value {
        match self.get_env(name, TypedValue::Null) {
            TypedValue::String(s) => decode_json(&s).unwrap_or(default),
            _ => default,
        }
    }

    /// Deserialize a JSON object or array variable into `T`
    ///
    /// Returns `Ok(None)` when the variable is not JSON at all.
    pub fn get_json_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.get_json(name, Value::Null) {
            Value::Null => Ok(None),
            value => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    /// Array value
    ///
    /// With `as_prefix`, `name` is treated as a prefix first; if extraction
    /// fails the lookup continues with `name` as a variable. A variable
    /// decodes as a JSON array/object or as a comma list, else `default`.
    pub fn get_array(&self, name: &str, default: ArrayValue, as_prefix: bool) -> ArrayValue {
        if as_prefix {
            match self.get_prefixed_group(name) {
                Ok(group) => return ArrayValue::Group(group),
                Err(err) if err.is_recoverable() => {
                    debug!(prefix = name, %err, "Prefix lookup failed, reading as a variable")
                }
                Err(err) => {
                    warn!(prefix = name, %err, "Prefix lookup error, reading as a variable")
                }
            }
        }

        let decoded = match self.get_env(name, TypedValue::Null) {
            TypedValue::String(s) => decode_json(&s)
                .map(ArrayValue::Json)
                .or_else(|| split_list(&s).map(ArrayValue::List)),
            _ => None,
        };
        decoded.unwrap_or(default)
    }

    /// Variables whose names start with `prefix`, prefix removed
    pub fn get_prefixed_group(&self, prefix: &str) -> Result<PrefixedGroup> {
        envref_core::prefix::extract(self.store(None), prefix)
    }

    /// Array value of a variable that must be present and non-null
    pub fn require_array(&self, name: &str) -> Result<ArrayValue> {
        self.require_env(name)?;
        Ok(self.get_array(name, ArrayValue::default(), false))
    }

    fn raw(&self, name: &str) -> Option<String> {
        self.store(None).get(name)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envref_core::{EnvTable, ServerTable};
    use serde::Deserialize;
    use serde_json::json;

    fn env_with(pairs: &[(&str, &str)]) -> Env {
        let table = EnvTable::from_pairs(pairs.iter().copied());
        Env::with_registry(StoreRegistry::empty().with_store(StoreMode::Env, Box::new(table)))
    }

    #[test]
    fn test_get_env_scalars() {
        let env = env_with(&[
            ("TEST_TRUE", "true"),
            ("TEST_FALSE", "False"),
            ("TEST_NULL", "NULL"),
            ("TEST_INT", "123"),
            ("TEST_FLOAT", "99.99"),
            ("TEST_EMPTY", ""),
        ]);

        assert_eq!(env.get_env("TEST_TRUE", TypedValue::Null), TypedValue::Bool(true));
        assert_eq!(env.get_env("TEST_FALSE", TypedValue::Null), TypedValue::Bool(false));
        assert_eq!(env.get_env("TEST_NULL", TypedValue::Int(0)), TypedValue::Null);
        assert_eq!(env.get_env("TEST_INT", TypedValue::Null), TypedValue::Int(123));
        assert_eq!(env.get_env("TEST_FLOAT", TypedValue::Null), TypedValue::Float(99.99));
        assert_eq!(
            env.get_env("TEST_EMPTY", TypedValue::from("dflt")),
            TypedValue::from("dflt")
        );
        assert_eq!(
            env.get_env("TEST_MISSING", TypedValue::from("dflt")),
            TypedValue::from("dflt")
        );
    }

    #[test]
    fn test_get_structured() {
        let env = env_with(&[
            ("TEST_ARRAY", "a,b,c,d"),
            ("TEST_JSON", r#"{"a":1,"b":2,"c":3}"#),
            ("TEST_JSON_ARRAY", "[1,2,3]"),
        ]);

        assert_eq!(
            env.get("TEST_ARRAY", TypedValue::Null),
            TypedValue::List(vec!["a".into(), "b".into(), "c".into(), "d".into()])
        );
        match env.get("TEST_JSON", TypedValue::Null) {
            TypedValue::Object(map) => assert!(map.contains_key("c")),
            other => panic!("expected object, got {other:?}"),
        }
        match env.get("TEST_JSON_ARRAY", TypedValue::Null) {
            TypedValue::Array(items) => assert_eq!(items.len(), 3),
            other => panic!("expected array, got {other:?}"),
        }
        // get_env never decodes
        assert_eq!(
            env.get_env("TEST_ARRAY", TypedValue::Null),
            TypedValue::from("a,b,c,d")
        );
    }

    #[test]
    fn test_mode_selection() {
        let stores = StoreRegistry::empty()
            .with_store(StoreMode::Env, Box::new(EnvTable::from_pairs([("WHERE", "env")])))
            .with_store(
                StoreMode::Server,
                Box::new(ServerTable::from_pairs([("WHERE", "server")])),
            );
        let mut env = Env::with_registry(stores);

        assert_eq!(env.get_env("WHERE", TypedValue::Null), TypedValue::from("env"));
        assert_eq!(
            env.read_all(Some(StoreMode::Server)).get("WHERE").map(String::as_str),
            Some("server")
        );

        env.set_mode(StoreMode::Server);
        assert_eq!(env.get_env("WHERE", TypedValue::Null), TypedValue::from("server"));

        env.set_mode_named("bogus");
        assert_eq!(env.mode(), StoreMode::Server);
        env.set_mode_code(9);
        assert_eq!(env.mode(), StoreMode::Server);
        env.set_mode_code(1);
        assert_eq!(env.mode(), StoreMode::Env);
        env.set_mode_named("SERVER");
        assert_eq!(env.mode(), StoreMode::Server);
    }

    #[test]
    fn test_set_env_override_policy() {
        let mut env = env_with(&[("SET", "old"), ("NULLED", "null")]);

        assert!(!env.set_env("SET", "new", false));
        assert_eq!(env.get_env("SET", TypedValue::Null), TypedValue::from("old"));

        assert!(env.set_env("SET", "new", true));
        assert_eq!(env.get_env("SET", TypedValue::Null), TypedValue::from("new"));

        // null counts as unset
        assert!(env.set_env("NULLED", 5_i64, false));
        assert_eq!(env.get_env("NULLED", TypedValue::Null), TypedValue::Int(5));

        assert!(env.set_env("FRESH", true, false));
        assert_eq!(env.read_all(None).get("FRESH").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_set_env_typed_values_read_back() {
        let mut env = env_with(&[]);
        env.set_env("LIST", vec!["x".to_string(), "y".to_string()], false);
        env.set_env("JSON", TypedValue::from(json!({"k": [1, 2]})), false);
        env.set_env("SANITIZED", "a\nb", false);

        assert_eq!(
            env.get("LIST", TypedValue::Null),
            TypedValue::List(vec!["x".into(), "y".into()])
        );
        assert_eq!(env.get_json("JSON", Value::Null), json!({"k": [1, 2]}));
        assert_eq!(env.get_env("SANITIZED", TypedValue::Null), TypedValue::from("ab"));
    }

    #[test]
    fn test_require_env() {
        let env = env_with(&[("PRESENT", "yes"), ("NULLED", "null"), ("OFF", "false")]);

        assert_eq!(env.require_env("PRESENT").unwrap(), TypedValue::from("yes"));
        assert_eq!(env.require_env("OFF").unwrap(), TypedValue::Bool(false));

        for name in ["ABSENT", "NULLED"] {
            match env.require_env(name) {
                Err(EnvrefError::MissingRequiredVariable(missing)) => assert_eq!(missing, name),
                other => panic!("expected missing variable error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_get_json() {
        let env = env_with(&[("OBJ", r#"{"a":1}"#), ("TEXT", "plain"), ("NUM", "4")]);

        assert_eq!(env.get_json("OBJ", Value::Null), json!({"a": 1}));
        assert_eq!(env.get_json("TEXT", json!([])), json!([]));
        assert_eq!(env.get_json("NUM", Value::Null), Value::Null);
        assert_eq!(env.get_json("ABSENT", json!({})), json!({}));
    }

    #[test]
    fn test_get_json_as() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Limits {
            max: u32,
        }

        let env = env_with(&[("LIMITS", r#"{"max": 10}"#), ("BAD", r#"{"max": "x"}"#)]);

        assert_eq!(env.get_json_as::<Limits>("LIMITS").unwrap(), Some(Limits { max: 10 }));
        assert_eq!(env.get_json_as::<Limits>("ABSENT").unwrap(), None);
        assert!(matches!(
            env.get_json_as::<Limits>("BAD"),
            Err(EnvrefError::Json(_))
        ));
    }

    #[test]
    fn test_get_array() {
        let env = env_with(&[
            ("LIST", "a,b"),
            ("JSON", "[1,2,3]"),
            ("SINGLE", "alone"),
            ("MAIL_HOST", "smtp"),
            ("MAIL_PORT", "25"),
        ]);

        assert_eq!(
            env.get_array("LIST", ArrayValue::default(), false),
            ArrayValue::List(vec!["a".into(), "b".into()])
        );
        assert_eq!(
            env.get_array("JSON", ArrayValue::default(), false),
            ArrayValue::Json(json!([1, 2, 3]))
        );
        let fallback = ArrayValue::List(vec!["fallback".into()]);
        assert_eq!(env.get_array("SINGLE", fallback.clone(), false), fallback);

        let group = env.get_array("MAIL_", ArrayValue::default(), true);
        assert_eq!(group.keys(), vec!["HOST", "PORT"]);
    }

    #[test]
    fn test_get_array_prefix_falls_back() {
        let table = EnvTable::new().with_enumeration(false);
        let env =
            Env::with_registry(StoreRegistry::empty().with_store(StoreMode::Env, Box::new(table)));

        let fallback = ArrayValue::List(vec!["x".into()]);
        assert_eq!(env.get_array("MAIL_", fallback.clone(), true), fallback);
        assert!(matches!(
            env.get_prefixed_group("MAIL_"),
            Err(EnvrefError::ConfigUnavailable(_))
        ));

        let env = env_with(&[("LIST", "a,b")]);
        assert_eq!(
            env.get_array("", ArrayValue::default(), true),
            ArrayValue::default()
        );
    }

    #[test]
    fn test_prefix_lookup_failures_are_recoverable() {
        let hidden = EnvTable::new().with_enumeration(false);
        let hidden_env =
            Env::with_registry(StoreRegistry::empty().with_store(StoreMode::Env, Box::new(hidden)));
        let env = env_with(&[("MAIL_HOST", "smtp")]);

        for err in [
            hidden_env.get_prefixed_group("MAIL_").unwrap_err(),
            env.get_prefixed_group("").unwrap_err(),
        ] {
            assert!(err.is_recoverable(), "{err} should fall back");
        }
    }

    #[test]
    fn test_require_array() {
        let env = env_with(&[("HOSTS", "a,b"), ("ONE", "a")]);

        assert_eq!(
            env.require_array("HOSTS").unwrap(),
            ArrayValue::List(vec!["a".into(), "b".into()])
        );
        assert_eq!(env.require_array("ONE").unwrap(), ArrayValue::default());
        assert!(matches!(
            env.require_array("ABSENT"),
            Err(EnvrefError::MissingRequiredVariable(_))
        ));
    }
}
