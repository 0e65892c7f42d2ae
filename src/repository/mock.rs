//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::context::TemplateContext;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContextReader, ContextRequest};

mock! {
    pub Repository {}

    impl ContextReader for Repository {
        fn load_template_context(&self, request: &ContextRequest) -> RepositoryResult<TemplateContext>;
    }
}
