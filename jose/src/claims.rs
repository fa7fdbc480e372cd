use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::b64;
use crate::error::Result;

/// The payload document of a token: a free-form mapping from claim name to
/// JSON value, with convenience accessors for the seven registered claim
/// names (`iss`, `sub`, `aud`, `exp`, `nbf`, `iat`, `jti`).
///
/// No claim is ever required. Absence is a normal, checkable state: `has`
/// answers `false`, `get` answers an empty string, and `del` of a missing
/// key is a no-op. Values are stored exactly as given; whether `exp` holds a
/// sensible timestamp is the caller's business.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims {
    claims: Map<String, Value>,
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(string) => string.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Claims {
    /// An empty claims document.
    pub fn new() -> Self {
        Claims::default()
    }

    /// Parse a claims document from JSON text.
    pub fn parse(document: &str) -> Result<Self> {
        Ok(Claims {
            claims: serde_json::from_str(document)?,
        })
    }

    /// Parse a claims document from base64url-encoded JSON, as found in the
    /// middle segment of a compact token.
    pub fn parse_base64(document: &str) -> Result<Self> {
        Ok(Claims {
            claims: serde_json::from_slice(&b64::decode(document)?)?,
        })
    }

    /// Render the document as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.claims)?)
    }

    /// Render the document as the base64url-encoded claims segment of a
    /// compact token.
    pub fn to_base64(&self) -> Result<String> {
        Ok(b64::encode(self.to_json()?))
    }

    /// True iff the claim is present, whatever its value.
    pub fn has(&self, key: &str) -> bool {
        self.claims.contains_key(key)
    }

    /// True iff the claim is present and its string representation equals
    /// `value`. A missing claim compares unequal, it is not an error.
    pub fn check(&self, key: &str, value: &str) -> bool {
        match self.claims.get(key) {
            Some(found) => value_to_string(found) == value,
            None => false,
        }
    }

    /// The string representation of a claim, or an empty string when the
    /// claim is absent. Numbers and booleans are coerced to their JSON text.
    pub fn get(&self, key: &str) -> String {
        self.claims.get(key).map(value_to_string).unwrap_or_default()
    }

    /// Insert or overwrite a claim. The value shape is not validated.
    pub fn set<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.claims.insert(key.to_string(), value.into());
    }

    /// Remove a claim; does nothing when it is absent.
    pub fn del(&mut self, key: &str) {
        self.claims.remove(key);
    }

    // has: registered claims

    pub fn has_iss(&self) -> bool {
        self.has("iss")
    }

    pub fn has_sub(&self) -> bool {
        self.has("sub")
    }

    pub fn has_aud(&self) -> bool {
        self.has("aud")
    }

    pub fn has_exp(&self) -> bool {
        self.has("exp")
    }

    pub fn has_nbf(&self) -> bool {
        self.has("nbf")
    }

    pub fn has_iat(&self) -> bool {
        self.has("iat")
    }

    pub fn has_jti(&self) -> bool {
        self.has("jti")
    }

    // check: registered claims

    pub fn check_iss(&self, value: &str) -> bool {
        self.check("iss", value)
    }

    pub fn check_sub(&self, value: &str) -> bool {
        self.check("sub", value)
    }

    pub fn check_aud(&self, value: &str) -> bool {
        self.check("aud", value)
    }

    pub fn check_exp(&self, value: &str) -> bool {
        self.check("exp", value)
    }

    pub fn check_nbf(&self, value: &str) -> bool {
        self.check("nbf", value)
    }

    pub fn check_iat(&self, value: &str) -> bool {
        self.check("iat", value)
    }

    pub fn check_jti(&self, value: &str) -> bool {
        self.check("jti", value)
    }

    // get: registered claims

    pub fn get_iss(&self) -> String {
        self.get("iss")
    }

    pub fn get_sub(&self) -> String {
        self.get("sub")
    }

    pub fn get_aud(&self) -> String {
        self.get("aud")
    }

    pub fn get_exp(&self) -> String {
        self.get("exp")
    }

    pub fn get_nbf(&self) -> String {
        self.get("nbf")
    }

    pub fn get_iat(&self) -> String {
        self.get("iat")
    }

    pub fn get_jti(&self) -> String {
        self.get("jti")
    }

    // set: registered claims

    pub fn set_iss<V: Into<Value>>(&mut self, value: V) {
        self.set("iss", value)
    }

    pub fn set_sub<V: Into<Value>>(&mut self, value: V) {
        self.set("sub", value)
    }

    pub fn set_aud<V: Into<Value>>(&mut self, value: V) {
        self.set("aud", value)
    }

    pub fn set_exp<V: Into<Value>>(&mut self, value: V) {
        self.set("exp", value)
    }

    pub fn set_nbf<V: Into<Value>>(&mut self, value: V) {
        self.set("nbf", value)
    }

    pub fn set_iat<V: Into<Value>>(&mut self, value: V) {
        self.set("iat", value)
    }

    pub fn set_jti<V: Into<Value>>(&mut self, value: V) {
        self.set("jti", value)
    }

    // del: registered claims

    pub fn del_iss(&mut self) {
        self.del("iss")
    }

    pub fn del_sub(&mut self) {
        self.del("sub")
    }

    pub fn del_aud(&mut self) {
        self.del("aud")
    }

    pub fn del_exp(&mut self) {
        self.del("exp")
    }

    pub fn del_nbf(&mut self) {
        self.del("nbf")
    }

    pub fn del_iat(&mut self) {
        self.del("iat")
    }

    pub fn del_jti(&mut self) {
        self.del("jti")
    }
}
