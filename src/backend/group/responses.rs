/**
 * Group Response Builder
 *
 * Pure transform from a populated group to the client-facing shape:
 * creator and members as usernames, dates formatted, freets embedded via
 * the freet response builder. No internal ids or version fields leak.
 */
use crate::backend::freet::responses::build_freet_response;
use crate::backend::group::db::PopulatedGroup;
use crate::shared::responses::GroupResponse;
use crate::shared::time::format_date;

pub fn build_group_response(group: &PopulatedGroup) -> GroupResponse {
    GroupResponse {
        id: group.record.id.to_string(),
        creator: group.record.creator_username.clone(),
        name: group.record.name.clone(),
        date_created: format_date(group.record.date_created),
        date_modified: format_date(group.record.date_modified),
        members: group.members.clone(),
        freets: group.freets.iter().map(build_freet_response).collect(),
    }
}
