//! When steps for message board BDD scenarios.

use super::world::BoardWorld;
use msgboard::board::{
    domain::Tag,
    transport::{NewMessageRequest, NewUserRequest},
};
use rstest_bdd_macros::when;

#[when(r#""{author}" posts "{body}" tagged "{tag}""#)]
fn user_posts_message(world: &mut BoardWorld, author: String, body: String, tag: String) {
    let result = world
        .service
        .post_message(NewMessageRequest::new(body, author, Tag::new(tag)));
    if let Ok(message) = &result {
        world.last_posted = Some(message.clone());
    }
    world.last_post_result = Some(result);
}

#[when(r#"a user named "{name}" registers"#)]
fn user_registers(world: &mut BoardWorld, name: String) {
    world.last_register_result = Some(world.service.register_user(NewUserRequest::new(name)));
}
