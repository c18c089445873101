use std::convert::Infallible;
use rocket::http::uri::Reference;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

/// The `Referer` header of the request, if any.
pub struct Referrer(pub Option<String>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Referrer {
    type Error = Infallible;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let referrer = req.headers()
            .get_one("Referer")
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(String::from);
        Outcome::Success(Referrer(referrer))
    }
}

/// Prefer sending the user back where they came from, unless the referrer
/// is not a usable URI reference.
pub fn redirect_target<'a>(referrer: Option<&'a str>, root: &'a str) -> &'a str {
    match referrer {
        Some(r) if !r.trim().is_empty() && Reference::parse(r).is_ok() => r,
        _ => root,
    }
}
