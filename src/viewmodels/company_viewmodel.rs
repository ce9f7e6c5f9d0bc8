// ============================================================================
// COMPANY VIEWMODEL - Compañías del usuario
// ============================================================================

use crate::models::Company;
use crate::services::ApiClient;
use crate::state::async_result::AsyncResult;
use crate::viewmodels::{required, ActionError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompaniesScreen {
    pub companies: AsyncResult<Vec<Company>>,
    pub new_name: String,
    /// Compañía en edición: (id, nombre provisional)
    pub editing: Option<(i64, String)>,
    pub busy: bool,
    pub action_error: Option<String>,
}

impl CompaniesScreen {
    pub fn start_edit(&mut self, company: &Company) {
        self.editing = Some((company.company_id, company.name.clone()));
        self.action_error = None;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self, company_id: i64) -> bool {
        matches!(&self.editing, Some((id, _)) if *id == company_id)
    }
}

#[derive(Clone)]
pub struct CompanyViewModel {
    api: ApiClient,
}

impl CompanyViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<Vec<Company>, ActionError> {
        let companies = self.api.my_companies().await?;
        log::info!("🏢 [COMPANIES] {} compañías cargadas", companies.len());
        Ok(companies)
    }

    /// Crear y devolver la lista actualizada
    pub async fn create(&self, name: &str) -> Result<Vec<Company>, ActionError> {
        let name = required(name, "company_name_required")?;
        self.api.create_company(&name).await?;
        self.load().await
    }

    pub async fn rename(&self, company_id: i64, name: &str) -> Result<Vec<Company>, ActionError> {
        let name = required(name, "company_name_required")?;
        self.api.rename_company(company_id, &name).await?;
        self.load().await
    }

    pub async fn delete(&self, company_id: i64) -> Result<Vec<Company>, ActionError> {
        self.api.delete_company(company_id).await?;
        log::info!("🗑️ [COMPANIES] Compañía {} eliminada", company_id);
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_json, status, TestHarness};
    use futures::executor::block_on;

    fn authed() -> TestHarness {
        let harness = TestHarness::new("/companies");
        harness.session.set("jwt", "customer");
        harness
    }

    #[test]
    fn create_posts_trimmed_name_then_reloads() {
        let harness = authed();
        harness.transport.route("POST /companies", ok_json("{}"));
        harness.transport.route("GET /companies/my", ok_json(r#"[{"CompanyID":4,"Name":"Volga Rigs"}]"#));

        let list = block_on(CompanyViewModel::new(harness.api.clone()).create("  Volga Rigs ")).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(
            harness.transport.paths(),
            vec!["POST /companies".to_string(), "GET /companies/my".to_string()]
        );
        assert_eq!(harness.transport.requests()[0].body.as_deref(), Some(r#"{"name":"Volga Rigs"}"#));
    }

    #[test]
    fn blank_name_is_rejected_locally() {
        let harness = authed();
        let result = block_on(CompanyViewModel::new(harness.api.clone()).create("   "));
        assert_eq!(result, Err(ActionError::Validation("company_name_required")));
        assert!(harness.transport.requests().is_empty());
    }

    #[test]
    fn failed_delete_does_not_reload() {
        let harness = authed();
        harness.transport.route("DELETE /companies/9", status(500, "boom"));
        let result = block_on(CompanyViewModel::new(harness.api.clone()).delete(9));
        assert!(result.is_err());
        assert_eq!(harness.transport.paths(), vec!["DELETE /companies/9".to_string()]);
    }

    #[test]
    fn edit_mode_tracks_a_single_company() {
        let mut screen = CompaniesScreen::default();
        let company = Company {
            company_id: 2,
            name: "Ural".to_string(),
            user_id: None,
            description: None,
            address: None,
        };
        screen.start_edit(&company);
        assert!(screen.is_editing(2));
        assert!(!screen.is_editing(3));
        screen.cancel_edit();
        assert!(!screen.is_editing(2));
    }
}
