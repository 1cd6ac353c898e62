use crate::error::Result;
use crate::wire::{
    type_mismatch, FromWire, SemanticKind, ToWire, WireFields, WireObject, WireValue,
};

/// Supported push notification platforms: Apple Push Notification Service
/// (APNS and APNS_SANDBOX) for iOS and Google Cloud Messaging (GCM) for
/// Android.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PushSetupPlatform {
    Gcm,
    Apns,
    ApnsSandbox,
    /// Symbol added service-side after this SDK was generated.
    Unknown(String),
}

impl PushSetupPlatform {
    pub fn as_symbol(&self) -> &str {
        match self {
            PushSetupPlatform::Gcm => "GCM",
            PushSetupPlatform::Apns => "APNS",
            PushSetupPlatform::ApnsSandbox => "APNS_SANDBOX",
            PushSetupPlatform::Unknown(symbol) => symbol,
        }
    }

    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "GCM" => PushSetupPlatform::Gcm,
            "APNS" => PushSetupPlatform::Apns,
            "APNS_SANDBOX" => PushSetupPlatform::ApnsSandbox,
            other => PushSetupPlatform::Unknown(other.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, PushSetupPlatform::Unknown(_))
    }
}

impl ToWire for PushSetupPlatform {
    fn to_wire(&self) -> WireValue {
        WireValue::String(self.as_symbol().to_string())
    }
}

impl FromWire for PushSetupPlatform {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let symbol = value
            .as_str()
            .ok_or_else(|| type_mismatch(path, SemanticKind::EnumSymbol, value))?;
        let parsed = Self::from_symbol(symbol);
        if parsed.is_unknown() {
            log::warn!(
                "unrecognized PushSetupPlatform symbol '{}' at '{}'",
                symbol,
                path
            );
        }
        Ok(parsed)
    }
}

/// Registers the title's push notification credentials for one platform.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetupPushNotificationRequest {
    /// Private key for APNS/APNS_SANDBOX, API key for GCM.
    pub credential: Option<String>,
    /// For APNS, the platform principal (SSL certificate).
    pub key: Option<String>,
    /// Name of the application sending the messages; 1-256 characters of
    /// ASCII letters, numbers, underscores, hyphens and periods.
    pub name: Option<String>,
    /// Replace any existing routing target with the newly generated one.
    /// When false, setup fails if notifications are already configured
    /// for the platform.
    pub overwrite_old_arn: Option<bool>,
    pub platform: Option<PushSetupPlatform>,
}

impl ToWire for SetupPushNotificationRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Credential", &self.credential)
            .optional("Key", &self.key)
            .optional("Name", &self.name)
            .optional("OverwriteOldARN", &self.overwrite_old_arn)
            .optional("Platform", &self.platform)
            .into_value()
    }
}

impl FromWire for SetupPushNotificationRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            credential: obj.optional("Credential")?,
            key: obj.optional("Key")?,
            name: obj.optional("Name")?,
            overwrite_old_arn: obj.optional("OverwriteOldARN")?,
            platform: obj.optional("Platform")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetupPushNotificationResult {
    /// Resource name of the created notification topic.
    pub arn: Option<String>,
}

impl ToWire for SetupPushNotificationResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new().optional("ARN", &self.arn).into_value()
    }
}

impl FromWire for SetupPushNotificationResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            arn: obj.optional("ARN")?,
        })
    }
}
