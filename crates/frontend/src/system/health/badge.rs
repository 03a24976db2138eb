use contracts::system::health::HealthStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::fetch_health;
use crate::shared::api_utils::{use_api_client, ClientError};

/// Что показывает индикатор
#[derive(Debug, Clone, PartialEq, Eq)]
enum HealthView {
    Checking,
    Online,
    Degraded(String),
    Unreachable,
}

impl HealthView {
    fn from_result(result: &Result<HealthStatus, ClientError>) -> Self {
        match result {
            Ok(health) if health.is_healthy() => HealthView::Online,
            Ok(health) => HealthView::Degraded(health.status.clone()),
            Err(_) => HealthView::Unreachable,
        }
    }

    fn label(&self) -> String {
        match self {
            HealthView::Checking => "Checking API…".to_string(),
            HealthView::Online => "API online".to_string(),
            HealthView::Degraded(status) => format!("API {}", status),
            HealthView::Unreachable => "API unreachable".to_string(),
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            HealthView::Checking => BadgeColor::Subtle,
            HealthView::Online => BadgeColor::Success,
            HealthView::Degraded(_) => BadgeColor::Warning,
            HealthView::Unreachable => BadgeColor::Danger,
        }
    }
}

/// Индикатор состояния API в шапке. Проверка выполняется один раз при монтировании.
#[component]
pub fn HealthBadge() -> impl IntoView {
    let client = use_api_client();
    let state = RwSignal::new(HealthView::Checking);

    spawn_local(async move {
        let result = fetch_health(&client).await;
        match &result {
            Ok(health) if !health.is_healthy() => {
                log::warn!(
                    "API health {}: database {} (connected: {})",
                    health.status,
                    health.database,
                    health.database_connected()
                )
            }
            Err(e) => log::warn!("health check failed: {}", e),
            Ok(_) => {}
        }
        state.try_set(HealthView::from_result(&result));
    });

    move || {
        let view_state = state.get();
        view! {
            <Badge appearance=BadgeAppearance::Tint color=view_state.color()>
                {view_state.label()}
            </Badge>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(status: &str) -> HealthStatus {
        HealthStatus {
            status: status.to_string(),
            database: "connected".to_string(),
        }
    }

    #[test]
    fn test_health_view() {
        assert_eq!(HealthView::from_result(&Ok(health("healthy"))), HealthView::Online);
        let degraded = HealthView::from_result(&Ok(health("degraded")));
        assert_eq!(degraded.label(), "API degraded");
        assert_eq!(
            HealthView::from_result(&Err(ClientError::Transport("offline".into()))),
            HealthView::Unreachable
        );
    }
}
