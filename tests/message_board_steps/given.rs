//! Given steps for message board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use msgboard::board::transport::NewUserRequest;
use rstest_bdd_macros::given;

#[given(r#"a registered user named "{name}""#)]
fn registered_user_named(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    world
        .service
        .register_user(NewUserRequest::new(name))
        .wrap_err("register user for scenario")?;
    Ok(())
}
