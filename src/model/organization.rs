use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Organization {
    #[schema(example = "ORG001")]
    pub organization_id: String,
    #[schema(example = "R&D Dept")]
    pub organization_name: String,
    #[schema(example = "E001")]
    pub manager_id: String,
    #[schema(example = "ORG000", nullable = true)]
    pub parent_organization_id: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct OrganizationSummary {
    #[schema(example = "ORG001")]
    pub organization_id: String,
    #[schema(example = "R&D Dept")]
    pub organization_name: String,
}
