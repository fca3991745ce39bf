pub(crate) mod deeplink;
pub(crate) mod form;

pub(crate) use form::ContactError;
