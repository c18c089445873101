use serde::{Serialize, Deserialize};

/// Header the upstream authentication layer fills with the signed-in user's id.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// The authenticated user acting on the current request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: String,
}

impl Member {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

// Backend-specific Rocket implementation
#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::http::Status;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for Member {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            match req.headers().get_one(USER_ID_HEADER).map(str::trim) {
                Some(id) if !id.is_empty() => Outcome::Success(Member::new(id)),
                _ => Outcome::Forward(Status::Unauthorized),
            }
        }
    }
}
