/**
 * Freet Response Builder
 *
 * Pure transform from a populated freet row to the client-facing shape.
 * Anonymous freets keep their stored author but present as "Anonymous".
 */
use crate::backend::freet::db::PopulatedFreet;
use crate::shared::responses::FreetResponse;
use crate::shared::time::format_date;

pub fn build_freet_response(freet: &PopulatedFreet) -> FreetResponse {
    FreetResponse {
        id: freet.id.to_string(),
        author: if freet.anonymous {
            "Anonymous".to_string()
        } else {
            freet.author_username.clone()
        },
        content: freet.content.clone(),
        anonymous: freet.anonymous,
        date_created: format_date(freet.date_created),
        date_modified: format_date(freet.date_modified),
    }
}
