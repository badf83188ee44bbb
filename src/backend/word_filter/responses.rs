/**
 * Word Filter Response Builder
 */
use crate::backend::word_filter::db::PopulatedWordFilter;
use crate::shared::responses::WordFilterResponse;

pub fn build_word_filter_response(filter: &PopulatedWordFilter) -> WordFilterResponse {
    WordFilterResponse {
        id: filter.id.to_string(),
        user: filter.username.clone(),
        word: filter.word.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn test_owner_is_username() {
        let filter = PopulatedWordFilter {
            id: Uuid::nil(),
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            word: "spoilers".to_string(),
        };
        let response = build_word_filter_response(&filter);
        assert_eq!(response.user, "alice");
        assert_eq!(response.word, "spoilers");
        assert_eq!(response, build_word_filter_response(&filter));
    }
}
