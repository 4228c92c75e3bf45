use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn greeting(&self, context: &Context<'_>) -> GqlResult<String> {
        let state = context.data::<AppState>()?;
        Ok(state.store.greeting())
    }

    async fn owner(&self, context: &Context<'_>) -> GqlResult<String> {
        let state = context.data::<AppState>()?;
        Ok(state.store.owner().to_string())
    }
}
