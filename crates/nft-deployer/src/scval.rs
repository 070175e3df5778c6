use crate::DeployHelperError;
use stellar_xdr::curr::{AccountId, ScAddress, ScString, ScVal, ScVec, StringM, VecM};

/// A trait for converting native rust values into a `ScVal`.
pub trait IntoScVal {
    fn try_into_val(&self) -> Result<ScVal, DeployHelperError>;
}

impl IntoScVal for AccountId {
    fn try_into_val(&self) -> Result<ScVal, DeployHelperError> {
        Ok(ScVal::Address(ScAddress::Account(self.clone())))
    }
}

impl IntoScVal for u32 {
    fn try_into_val(&self) -> Result<ScVal, DeployHelperError> {
        Ok(ScVal::U32(*self))
    }
}

impl IntoScVal for str {
    fn try_into_val(&self) -> Result<ScVal, DeployHelperError> {
        let string_m = StringM::<{ u32::MAX }>::try_from(self).map_err(|_| {
            DeployHelperError::XdrEncodingFailed("Failed to convert String to StringM".to_string())
        })?;
        Ok(ScVal::String(ScString::from(string_m)))
    }
}

impl IntoScVal for String {
    fn try_into_val(&self) -> Result<ScVal, DeployHelperError> {
        self.as_str().try_into_val()
    }
}

impl IntoScVal for Vec<ScVal> {
    fn try_into_val(&self) -> Result<ScVal, DeployHelperError> {
        let vec_m = VecM::try_from(self).map_err(|_| {
            DeployHelperError::XdrEncodingFailed("Failed to convert Vec to VecM".to_string())
        })?;
        Ok(ScVal::Vec(Some(ScVec::from(vec_m))))
    }
}

/// Sequences become an `ScVal::Vec` with elements in the same order.
impl<T: IntoScVal> IntoScVal for [T] {
    fn try_into_val(&self) -> Result<ScVal, DeployHelperError> {
        self.iter()
            .map(IntoScVal::try_into_val)
            .collect::<Result<Vec<ScVal>, _>>()?
            .try_into_val()
    }
}
