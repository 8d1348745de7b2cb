//! Root greeting.

use crate::config::ROOT_BODY;

pub async fn index() -> &'static str {
    ROOT_BODY
}
