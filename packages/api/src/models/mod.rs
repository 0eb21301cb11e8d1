//! Wire records for the REST backend.
//!
//! Records deserialize leniently (every field optional) and are normalized into
//! the `store` view models once, here at the boundary.

mod comment;
mod post;
mod user;

pub use comment::{CommentRecord, CommentUpdate, NewComment};
pub use post::{NewPost, PostRecord, PostUpdate};
pub use user::{Credentials, ProfileUpdate, Registration, UserRecord};

use serde_json::Value;

/// Some endpoints wrap the record they return (`{"post": {...}}`,
/// `{"user": {...}}`). Return the inner object when present, else the body.
pub fn unwrap_record(body: Value, key: &str) -> Value {
    match body {
        Value::Object(mut map) if map.get(key).is_some_and(Value::is_object) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        other => other,
    }
}
