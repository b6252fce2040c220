use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::detail::DetailView;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::SharedSession;
use crate::domain::session::use_cases::detail::{DetailAction, DetailUseCase};

pub struct DetailUseCaseImpl {
    pub session: SharedSession,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DetailUseCase for DetailUseCaseImpl {
    async fn execute(&self, action: DetailAction) -> Result<Option<DetailView>, SessionError> {
        let mut session = self.session.lock().await;

        match action {
            DetailAction::Open(id) => {
                let detail = session.open_detail(id)?.clone();
                self.logger
                    .info(&format!("Showing details of product {}", id));
                return Ok(Some(detail));
            }
            DetailAction::Back => {
                session.close_detail();
                return Ok(None);
            }
            _ => {}
        }

        let detail = session
            .detail
            .as_mut()
            .ok_or(SessionError::NoProductSelected)?;
        match action {
            DetailAction::Increment => detail.increment(),
            DetailAction::Decrement => {
                detail.decrement();
            }
            DetailAction::Buy => self
                .logger
                .info(&format!("Buy requested for product {}", detail.product.id)),
            DetailAction::Open(_) | DetailAction::Back => {}
        }
        Ok(Some(detail.clone()))
    }
}
