use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::session::detail::DetailView;
use business::domain::session::errors::SessionError;
use business::domain::session::model::Overlay;
use business::domain::session::use_cases::detail::{DetailAction, DetailUseCase};
use business::domain::session::use_cases::dismiss_alert::DismissAlertUseCase;
use business::domain::session::use_cases::snapshot::GetSessionSnapshotUseCase;
use business::domain::session::use_cases::toggle_overlay::{
    ToggleOverlayParams, ToggleOverlayUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::dto::{AlertResponse, DetailResponse, OverlayResponse, SessionResponse};
use crate::api::tags::ApiTags;

pub struct SessionApi {
    snapshot_use_case: Arc<dyn GetSessionSnapshotUseCase>,
    toggle_overlay_use_case: Arc<dyn ToggleOverlayUseCase>,
    detail_use_case: Arc<dyn DetailUseCase>,
    dismiss_alert_use_case: Arc<dyn DismissAlertUseCase>,
}

impl SessionApi {
    pub fn new(
        snapshot_use_case: Arc<dyn GetSessionSnapshotUseCase>,
        toggle_overlay_use_case: Arc<dyn ToggleOverlayUseCase>,
        detail_use_case: Arc<dyn DetailUseCase>,
        dismiss_alert_use_case: Arc<dyn DismissAlertUseCase>,
    ) -> Self {
        Self {
            snapshot_use_case,
            toggle_overlay_use_case,
            detail_use_case,
            dismiss_alert_use_case,
        }
    }

    async fn run_detail(&self, action: DetailAction) -> DetailApiResponse {
        into_detail_response(self.detail_use_case.execute(action).await)
    }
}

fn into_detail_response(result: Result<Option<DetailView>, SessionError>) -> DetailApiResponse {
    match result {
        Ok(Some(detail)) => DetailApiResponse::Ok(Json(detail.into())),
        Ok(None) => DetailApiResponse::NoContent,
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                404 => DetailApiResponse::NotFound(json),
                _ => DetailApiResponse::Conflict(json),
            }
        }
    }
}

/// Session and view state API
#[OpenApi]
impl SessionApi {
    /// Get the session
    ///
    /// Everything a view binds to: flags, displayed products, favorites, cart
    /// with count and total, and the detail page when one is open.
    #[oai(path = "/session", method = "get", tag = "ApiTags::Session")]
    async fn snapshot(&self) -> Json<SessionResponse> {
        Json(self.snapshot_use_case.execute().await.into())
    }

    /// Toggle an overlay
    ///
    /// `favorites` switches the favorites-only filter, `cart` and `menu` show
    /// or hide their overlay.
    #[oai(
        path = "/view/overlays/:overlay/toggle",
        method = "post",
        tag = "ApiTags::Session"
    )]
    async fn toggle_overlay(&self, overlay: Path<String>) -> ToggleOverlayApiResponse {
        let overlay = match overlay.0.parse::<Overlay>() {
            Ok(overlay) => overlay,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return ToggleOverlayApiResponse::BadRequest(json);
            }
        };

        let shown = self
            .toggle_overlay_use_case
            .execute(ToggleOverlayParams { overlay })
            .await;
        ToggleOverlayApiResponse::Ok(Json(OverlayResponse {
            overlay: overlay.to_string(),
            shown,
        }))
    }

    /// Open the detail page
    ///
    /// Selects the product and resets the quantity counter to 1.
    #[oai(path = "/view/detail/:id", method = "post", tag = "ApiTags::Session")]
    async fn open_detail(&self, id: Path<u64>) -> DetailApiResponse {
        self.run_detail(DetailAction::Open(id.0)).await
    }

    /// Back to the product list
    #[oai(path = "/view/detail", method = "delete", tag = "ApiTags::Session")]
    async fn close_detail(&self) -> DetailApiResponse {
        self.run_detail(DetailAction::Back).await
    }

    /// Increase the detail counter
    #[oai(
        path = "/view/detail/increment",
        method = "post",
        tag = "ApiTags::Session"
    )]
    async fn increment_detail(&self) -> DetailApiResponse {
        self.run_detail(DetailAction::Increment).await
    }

    /// Decrease the detail counter, never below 1
    #[oai(
        path = "/view/detail/decrement",
        method = "post",
        tag = "ApiTags::Session"
    )]
    async fn decrement_detail(&self) -> DetailApiResponse {
        self.run_detail(DetailAction::Decrement).await
    }

    /// Buy now
    ///
    /// Accepted and ignored.
    #[oai(path = "/view/detail/buy", method = "post", tag = "ApiTags::Session")]
    async fn buy(&self) -> DetailApiResponse {
        self.run_detail(DetailAction::Buy).await
    }

    /// Dismiss the alert
    #[oai(path = "/view/alert", method = "delete", tag = "ApiTags::Session")]
    async fn dismiss_alert(&self) -> Json<AlertResponse> {
        Json(AlertResponse {
            dismissed: self.dismiss_alert_use_case.execute().await,
        })
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleOverlayApiResponse {
    #[oai(status = 200)]
    Ok(Json<OverlayResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DetailApiResponse {
    #[oai(status = 200)]
    Ok(Json<DetailResponse>),
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
}
