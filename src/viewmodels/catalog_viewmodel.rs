// ============================================================================
// CATALOG VIEWMODEL - Catálogo de servicios y "mis servicios"
// ============================================================================

use crate::models::{Company, CompanyService, Service};
use crate::services::ApiClient;
use crate::state::async_result::AsyncResult;
use crate::viewmodels::{required, ActionError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicesScreen {
    pub services: AsyncResult<Vec<Service>>,
    pub new_title: String,
    pub busy: bool,
    pub action_error: Option<String>,
}

/// Vínculos + compañías del usuario, cargados juntos
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MyServicesData {
    pub bindings: Vec<CompanyService>,
    pub companies: Vec<Company>,
}

impl MyServicesData {
    /// Nombre de la compañía: el embebido o el de la lista de compañías
    pub fn company_name(&self, binding: &CompanyService) -> String {
        binding
            .company_name()
            .map(str::to_string)
            .or_else(|| {
                self.companies
                    .iter()
                    .find(|c| c.company_id == binding.company_id)
                    .map(|c| c.name.clone())
            })
            .unwrap_or_else(|| format!("#{}", binding.company_id))
    }

    pub fn service_title(&self, binding: &CompanyService) -> String {
        binding
            .service_title()
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", binding.service_id))
    }

    /// Filas ordenadas por compañía y título
    pub fn rows(&self) -> Vec<&CompanyService> {
        let mut rows: Vec<&CompanyService> = self.bindings.iter().collect();
        rows.sort_by_key(|b| (self.company_name(b).to_lowercase(), self.service_title(b).to_lowercase()));
        rows
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MyServicesScreen {
    pub data: AsyncResult<MyServicesData>,
    pub selected_company: Option<i64>,
    pub new_title: String,
    /// Servicio en edición: (service_id, título provisional)
    pub editing: Option<(i64, String)>,
    pub busy: bool,
    pub action_error: Option<String>,
}

impl MyServicesScreen {
    /// Compañía elegida, o la primera si no hay elección válida
    pub fn target_company(&self) -> Option<i64> {
        let companies = &self.data.data()?.companies;
        self.selected_company
            .filter(|id| companies.iter().any(|c| c.company_id == *id))
            .or_else(|| companies.first().map(|c| c.company_id))
    }
}

#[derive(Clone)]
pub struct CatalogViewModel {
    api: ApiClient,
}

impl CatalogViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load_services(&self) -> Result<Vec<Service>, ActionError> {
        Ok(self.api.services().await?)
    }

    pub async fn create_service(&self, title: &str) -> Result<Vec<Service>, ActionError> {
        let title = required(title, "service_title_required")?;
        self.api.create_service(&title).await?;
        self.load_services().await
    }

    /// Vínculos y compañías en paralelo; si falla uno, falla todo
    pub async fn load_my_services(&self) -> Result<MyServicesData, ActionError> {
        let (bindings, companies) =
            futures::try_join!(self.api.my_company_services(), self.api.my_companies())?;
        log::info!(
            "🧰 [MY-SERVICES] {} vínculos en {} compañías",
            bindings.len(),
            companies.len()
        );
        Ok(MyServicesData { bindings, companies })
    }

    /// Crear el servicio en el catálogo y vincularlo a la compañía
    pub async fn add_to_company(
        &self,
        company_id: Option<i64>,
        title: &str,
    ) -> Result<MyServicesData, ActionError> {
        let company_id = company_id.ok_or(ActionError::Validation("company_required"))?;
        let title = required(title, "service_title_required")?;
        let service = self.api.create_service(&title).await?;
        self.api.bind_service(company_id, service.service_id).await?;
        self.load_my_services().await
    }

    pub async fn rename_service(&self, service_id: i64, title: &str) -> Result<MyServicesData, ActionError> {
        let title = required(title, "service_title_required")?;
        self.api.rename_service(service_id, &title).await?;
        self.load_my_services().await
    }

    pub async fn unbind(&self, company_service_id: i64) -> Result<MyServicesData, ActionError> {
        self.api.unbind_service(company_service_id).await?;
        self.load_my_services().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_json, status, TestHarness};
    use futures::executor::block_on;

    const BINDINGS: &str = r#"[
        {"CompanyServiceID":11,"CompanyID":1,"ServiceID":5,"Service":{"ServiceID":5,"Title":"Drilling"}},
        {"CompanyServiceID":12,"CompanyID":2,"ServiceID":6}
    ]"#;
    const COMPANIES: &str = r#"[{"CompanyID":1,"Name":"Volga"},{"CompanyID":2,"Name":"Arctic"}]"#;

    fn authed() -> TestHarness {
        let harness = TestHarness::new("/my-services");
        harness.session.set("jwt", "customer");
        harness
    }

    #[test]
    fn my_services_combine_bindings_and_companies() {
        let harness = authed();
        harness.transport.route("GET /company-services/my", ok_json(BINDINGS));
        harness.transport.route("GET /companies/my", ok_json(COMPANIES));

        let data = block_on(CatalogViewModel::new(harness.api.clone()).load_my_services()).unwrap();
        let rows = data.rows();
        assert_eq!(data.company_name(rows[0]), "Arctic");
        assert_eq!(data.service_title(rows[0]), "#6");
        assert_eq!(data.service_title(rows[1]), "Drilling");
    }

    #[test]
    fn my_services_fail_as_a_whole() {
        let harness = authed();
        harness.transport.route("GET /company-services/my", ok_json(BINDINGS));
        harness.transport.route("GET /companies/my", status(500, "down"));

        let result = block_on(CatalogViewModel::new(harness.api.clone()).load_my_services());
        assert!(result.is_err());
    }

    #[test]
    fn add_to_company_creates_then_binds() {
        let harness = authed();
        harness.transport.route("POST /services", ok_json(r#"{"ServiceID":77,"Title":"Cementing"}"#));
        harness.transport.route("POST /company-services", ok_json("{}"));
        harness.transport.route("GET /company-services/my", ok_json("[]"));
        harness.transport.route("GET /companies/my", ok_json(COMPANIES));

        block_on(CatalogViewModel::new(harness.api.clone()).add_to_company(Some(2), "Cementing")).unwrap();
        let requests = harness.transport.requests();
        assert_eq!(requests[1].body.as_deref(), Some(r#"{"company_id":2,"service_id":77}"#));
    }

    #[test]
    fn add_without_company_is_rejected() {
        let harness = authed();
        let result = block_on(CatalogViewModel::new(harness.api.clone()).add_to_company(None, "X"));
        assert_eq!(result, Err(ActionError::Validation("company_required")));
    }

    #[test]
    fn target_company_falls_back_to_first() {
        let mut screen = MyServicesScreen {
            data: AsyncResult::Success(MyServicesData {
                bindings: Vec::new(),
                companies: serde_json::from_str(COMPANIES).unwrap(),
            }),
            ..MyServicesScreen::default()
        };
        assert_eq!(screen.target_company(), Some(1));
        screen.selected_company = Some(2);
        assert_eq!(screen.target_company(), Some(2));
        screen.selected_company = Some(99);
        assert_eq!(screen.target_company(), Some(1));
    }
}
