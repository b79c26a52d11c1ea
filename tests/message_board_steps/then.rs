//! Then steps for message board BDD scenarios.

use super::world::BoardWorld;
use msgboard::board::{domain::Tag, services::BoardServiceError};
use rstest_bdd_macros::then;

#[then(r#"listing messages tagged "{tag}" returns {count:usize} entries"#)]
fn listing_returns_count(world: &BoardWorld, tag: String, count: usize) -> Result<(), eyre::Report> {
    let views = world
        .service
        .find_messages_by_tag(&Tag::new(&tag))
        .map_err(|err| eyre::eyre!("listing tag '{tag}' failed: {err}"))?;
    if views.len() != count {
        return Err(eyre::eyre!(
            "expected {count} messages under '{tag}', found {}",
            views.len()
        ));
    }
    Ok(())
}

#[then(r#"listing messages tagged "{tag}" is not found"#)]
fn listing_is_not_found(world: &BoardWorld, tag: String) -> Result<(), eyre::Report> {
    let result = world.service.find_messages_by_tag(&Tag::new(&tag));
    if !matches!(result, Err(BoardServiceError::NotFound)) {
        return Err(eyre::eyre!("expected tag '{tag}' to be unknown, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the posted message can be read back with author "{name}""#)]
fn posted_message_readable(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let posted = world
        .last_posted
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no posted message in scenario world"))?;
    let view = world
        .service
        .read_message(posted.id())
        .map_err(|err| eyre::eyre!("read failed: {err}"))?;
    if view.author != name || view.body != posted.body() {
        return Err(eyre::eyre!("unexpected message view: {view:?}"));
    }
    Ok(())
}

#[then("registration fails with a duplicate name error")]
fn registration_fails_with_duplicate_name(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(result, Err(BoardServiceError::DuplicateUserName(_))) {
        return Err(eyre::eyre!("expected duplicate name error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"posting fails with validation error "{text}""#)]
fn posting_fails_with_validation_error(world: &BoardWorld, text: String) -> Result<(), eyre::Report> {
    let result = world
        .last_post_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing posting result in scenario world"))?;
    match result {
        Err(BoardServiceError::Validation(err)) if err.to_string() == text => Ok(()),
        other => Err(eyre::eyre!("expected validation error '{text}', got {other:?}")),
    }
}
