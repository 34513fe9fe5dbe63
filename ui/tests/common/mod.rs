use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Must be retained to keep the HTTP endpoint alive during the test.
    #[allow(dead_code)]
    pub mock_server: MockServer,
    pub harness: Harness<'a, RosterApp>,
}

impl TestCtx<'_> {
    /// App wired to a mock server answering `GET /user/` with `template`.
    pub async fn with_response(template: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub async fn with_users(names: &[&str]) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(users_body(names))).await
    }

    /// Pump frames until in-flight fetches have landed.
    pub async fn settle(&mut self) {
        for _ in 0..20 {
            self.harness.step();
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }
    }
}

#[allow(unused)]
pub fn users_body(names: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "count": names.len(),
        "results": names.iter().enumerate().map(|(i, name)| serde_json::json!({
            "name": name,
            // Must not contain the name: labels are queried by substring and
            // kittest's singular queries panic on multiple matches.
            "email": format!("contact{i}@example.net"),
            "phone": "555-0100",
            "address": { "local_address": "1 Main St", "city": "Springfield" },
            "certifications": [ { "certificate_name": "CPR" } ],
            "profession": [ { "profession": "Nurse" } ]
        })).collect::<Vec<_>>()
    })
}
