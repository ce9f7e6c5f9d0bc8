// ============================================================================
// ADMIN VIEWMODEL - Usuarios, analítica, reservas por usuario
// ============================================================================

use crate::models::{ActiveUser, Booking, User};
use crate::services::ApiClient;
use crate::state::async_result::AsyncResult;
use crate::viewmodels::ActionError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminUsersScreen {
    pub users: AsyncResult<Vec<User>>,
    pub action_error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsScreen {
    pub users: AsyncResult<Vec<ActiveUser>>,
}

impl AnalyticsScreen {
    /// Total de reservas activas entre todos los usuarios listados
    pub fn total_active(&self) -> i64 {
        self.users
            .data()
            .map(|users| users.iter().map(|u| u.active_bookings).sum())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminUserBookingsScreen {
    pub user_id: i64,
    pub bookings: AsyncResult<Vec<Booking>>,
}

impl AdminUserBookingsScreen {
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct AdminViewModel {
    api: ApiClient,
}

impl AdminViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load_users(&self) -> Result<Vec<User>, ActionError> {
        Ok(self.api.users().await?)
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<Vec<User>, ActionError> {
        self.api.delete_user(user_id).await?;
        log::warn!("🗑️ [ADMIN] Usuario {} eliminado", user_id);
        self.load_users().await
    }

    /// Ordenados por número de reservas activas, de mayor a menor
    pub async fn load_analytics(&self) -> Result<Vec<ActiveUser>, ActionError> {
        let mut users = self.api.users_with_active_bookings().await?;
        users.sort_by(|a, b| b.active_bookings.cmp(&a.active_bookings));
        Ok(users)
    }

    pub async fn load_user_bookings(&self, user_id: i64) -> Result<Vec<Booking>, ActionError> {
        Ok(self.api.bookings_of_user(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_json, TestHarness};
    use futures::executor::block_on;

    fn admin() -> TestHarness {
        let harness = TestHarness::new("/admin");
        harness.session.set("jwt", "admin");
        harness
    }

    #[test]
    fn analytics_sorted_by_active_bookings() {
        let harness = admin();
        harness.transport.route(
            "GET /business/users-with-active-bookings",
            ok_json(
                r#"[{"user_id":1,"name":"A","active_bookings":1},
                    {"user_id":2,"name":"B","active_bookings":4},
                    {"user_id":3,"name":"C","active_bookings":2}]"#,
            ),
        );

        let users = block_on(AdminViewModel::new(harness.api.clone()).load_analytics()).unwrap();
        let ids: Vec<i64> = users.iter().map(|u| u.user_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let screen = AnalyticsScreen {
            users: AsyncResult::Success(users),
        };
        assert_eq!(screen.total_active(), 7);
    }

    #[test]
    fn user_bookings_query_by_user_id() {
        let harness = admin();
        harness.transport.route("GET /bookings?user_id=5", ok_json(r#"[{"BookingID":1,"Status":"requested"}]"#));

        let bookings = block_on(AdminViewModel::new(harness.api.clone()).load_user_bookings(5)).unwrap();
        assert_eq!(bookings.len(), 1);
    }

    #[test]
    fn delete_user_reloads_list() {
        let harness = admin();
        harness.transport.route("DELETE /users/4", ok_json("{}"));
        harness.transport.route("GET /users", ok_json(r#"[{"UserID":1,"Name":"Root","Role":"admin"}]"#));

        let users = block_on(AdminViewModel::new(harness.api.clone()).delete_user(4)).unwrap();
        assert!(users[0].role.is_admin());
    }
}
