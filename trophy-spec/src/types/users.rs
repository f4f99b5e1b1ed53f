//! User records.

use super::Timestamp;
use std::collections::HashMap;

record! {
    /// A user as sent to Trophy when tracking activity or creating users.
    ///
    /// Only `id` is required; Trophy creates the user on first sight.
    pub struct UpsertedUser {
        /// The ID of the user in your database.
        id: String => "id",
        email: Option<String> => "email",
        name: Option<String> => "name",
        /// IANA timezone, e.g. `Europe/London`.
        tz: Option<String> => "tz",
        device_tokens: Option<Vec<String>> => "deviceTokens",
        subscribe_to_emails: Option<bool> => "subscribeToEmails",
        /// Custom user attributes keyed by attribute key.
        attributes: Option<HashMap<String, String>> => "attributes",
    }
}

record! {
    /// Fields to change on an existing user.
    pub struct UpdatedUser {
        email: Option<String> => "email",
        name: Option<String> => "name",
        tz: Option<String> => "tz",
        device_tokens: Option<Vec<String>> => "deviceTokens",
        subscribe_to_emails: Option<bool> => "subscribeToEmails",
        attributes: Option<HashMap<String, String>> => "attributes",
    }
}

record! {
    /// A Trophy user.
    pub struct User {
        id: String => "id",
        email: Option<String> => "email",
        name: Option<String> => "name",
        tz: Option<String> => "tz",
        device_tokens: Option<Vec<String>> => "deviceTokens",
        subscribe_to_emails: Option<bool> => "subscribeToEmails",
        attributes: Option<HashMap<String, String>> => "attributes",
        /// Whether the user is in the experiment control group.
        control: Option<bool> => "control",
        created: Option<Timestamp> => "created",
        updated: Option<Timestamp> => "updated",
    }
}

record! {
    /// Error body returned by the API on failed requests.
    pub struct ErrorBody {
        error: String => "error",
    }
}

impl UpsertedUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tz(mut self, tz: impl Into<String>) -> Self {
        self.tz = Some(tz.into());
        self
    }

    pub fn with_device_tokens(mut self, tokens: Vec<String>) -> Self {
        self.device_tokens = Some(tokens);
        self
    }

    pub fn with_subscribe_to_emails(mut self, subscribe: bool) -> Self {
        self.subscribe_to_emails = Some(subscribe);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}
