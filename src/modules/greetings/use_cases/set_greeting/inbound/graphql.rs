use async_graphql::{Context, Object, Result as GqlResult};

use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Replace the greeting. Only the owner may call this; returns the stored greeting.
    async fn set_greeting(&self, context: &Context<'_>, greeting: String) -> GqlResult<String> {
        let state = context.data::<AppState>()?;
        let caller = context
            .data_opt::<Identity>()
            .ok_or_else(|| async_graphql::Error::new("missing caller identity"))?;

        state
            .store
            .set_greeting(caller, greeting.clone())
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(greeting)
    }
}
