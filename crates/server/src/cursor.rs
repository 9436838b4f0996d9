use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use shared_types::AppError;
use uuid::Uuid;

/// Keyset cursor for the user listing, which is ordered by `(name, id)`.
///
/// Serialized as base64 over `"{name}|{id}"` so clients treat it as an
/// opaque token. Names may themselves contain `|`, so decoding splits on
/// the last separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCursor {
    pub name: String,
    pub id: Uuid,
}

impl UserCursor {
    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}|{}", self.name, self.id))
    }

    pub fn decode(token: &str) -> Result<Self, AppError> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|_| AppError::bad_request("Malformed pagination cursor"))?;
        let raw = String::from_utf8(bytes)
            .map_err(|_| AppError::bad_request("Malformed pagination cursor"))?;
        let (name, id) = raw
            .rsplit_once('|')
            .ok_or_else(|| AppError::bad_request("Malformed pagination cursor"))?;
        let id = Uuid::parse_str(id)
            .map_err(|_| AppError::bad_request("Malformed pagination cursor"))?;
        Ok(UserCursor {
            name: name.to_string(),
            id,
        })
    }
}
