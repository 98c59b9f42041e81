//! Detail endpoint client.

use gloo_net::http::Request;
use iamview_core::{EntityDetail, FetchError, FetchResult};

/// Which kind of IAM entity a detail panel shows. The two endpoints share a
/// response shape and differ only in path and panel class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Role,
    User,
}

impl EntityKind {
    fn path_segment(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::User => "user",
        }
    }

    /// CSS class shared by all detail panels of this kind.
    pub fn panel_class(self) -> &'static str {
        match self {
            Self::Role => "role-details",
            Self::User => "user-details",
        }
    }

    /// Trigger attribute carrying the entity name.
    pub fn name_attribute(self) -> &'static str {
        match self {
            Self::Role => "data-role-name",
            Self::User => "data-user-name",
        }
    }

    /// Human label for failure messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::User => "user",
        }
    }
}

/// `GET /{role|user}/{accountId}/{entityName}`.
///
/// Anything but a 2xx JSON body of the expected shape is an error; the
/// caller treats all variants the same way (alert, panel stays closed).
pub async fn fetch_entity_detail(
    kind: EntityKind,
    account_id: &str,
    entity_name: &str,
) -> FetchResult<EntityDetail> {
    let url = format!("/{}/{}/{}", kind.path_segment(), account_id, entity_name);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| FetchError::network(err.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<EntityDetail>()
        .await
        .map_err(|err| FetchError::decode(err.to_string()))
}
