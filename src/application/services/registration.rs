use super::court_service::CourtService;
use crate::application::ports::{Geocoder, ImageAttachments};
use crate::domain::entities::{Court, CourtDraft};
use crate::domain::value_objects::Coordinates;
use crate::shared::cancellation::run_cancellable;
use crate::shared::error::AppError;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// 入力中の登録フォーム
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub location: Coordinates,
    pub address: String,
    pub image_url: Option<String>,
}

/// 地図で選んだ地点から新しいコートを登録するまでの流れ
pub struct RegistrationFlow {
    courts: Arc<CourtService>,
    geocoder: Option<Arc<dyn Geocoder>>,
    attachments: Arc<dyn ImageAttachments>,
    form: Option<RegistrationForm>,
}

impl RegistrationFlow {
    pub fn new(
        courts: Arc<CourtService>,
        geocoder: Option<Arc<dyn Geocoder>>,
        attachments: Arc<dyn ImageAttachments>,
    ) -> Self {
        Self {
            courts,
            geocoder,
            attachments,
            form: None,
        }
    }

    pub fn begin(&mut self, location: Coordinates) -> &RegistrationForm {
        debug!(%location, "registration started");
        self.form.insert(RegistrationForm {
            location,
            address: String::new(),
            image_url: None,
        })
    }

    pub fn form(&self) -> Option<&RegistrationForm> {
        self.form.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    /// 逆ジオコーディングで住所欄を埋める。失敗しても空欄のまま続行する
    pub async fn prefill_address(&mut self, cancel: &CancellationToken) -> Option<String> {
        let geocoder = self.geocoder.as_ref()?;
        let location = self.form.as_ref()?.location;

        let address = match run_cancellable(cancel, geocoder.address_for(location)).await {
            Ok(address) => address,
            Err(AppError::Cancelled) => return None,
            Err(e) => {
                warn!(%location, "Failed to look up address: {}", e);
                return None;
            }
        };

        let form = self.form.as_mut()?;
        if form.address.trim().is_empty() {
            form.address = address.clone();
        }
        Some(address)
    }

    pub async fn attach_image(&mut self, path: &Path) -> Result<(), AppError> {
        if self.form.is_none() {
            return Err(AppError::InvalidInput(
                "Registration form is not open".to_string(),
            ));
        }
        let data_uri = self.attachments.load_data_uri(path).await?;
        if let Some(form) = self.form.as_mut() {
            form.image_url = Some(data_uri);
        }
        Ok(())
    }

    /// 登録に成功したらフォームを閉じる。失敗時は入力を残す
    pub async fn submit(
        &mut self,
        name: &str,
        address: &str,
        review: Option<&str>,
        is_indoor: bool,
        cancel: &CancellationToken,
    ) -> Result<Court, AppError> {
        let form = self.form.as_ref().ok_or_else(|| {
            AppError::InvalidInput("Registration form is not open".to_string())
        })?;

        let draft = CourtDraft {
            name: name.to_string(),
            address: address.to_string(),
            latitude: form.location.latitude,
            longitude: form.location.longitude,
            review: review.map(str::to_string),
            image_url: form.image_url.clone(),
            is_indoor,
        };

        let court = self.courts.create_court(draft, cancel).await?;
        info!(court_id = %court.id, "registration completed");
        self.form = None;
        Ok(court)
    }

    pub fn cancel(&mut self) {
        if self.form.take().is_some() {
            debug!("registration cancelled");
        }
    }
}
