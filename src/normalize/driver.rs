//! Raw driver records → [`Driver`]

use serde_json::Value;

use super::fields::{Candidates, integer};
use crate::types::Driver;

pub(crate) const ID: Candidates = Candidates::new(&["driverId", "driver_id", "id"]);
pub(crate) const NAME: Candidates = Candidates::new(&["name", "firstName", "givenName"]);
pub(crate) const SURNAME: Candidates = Candidates::new(&["surname", "lastName", "familyName"]);
const CODE: Candidates = Candidates::new(&["shortName", "code"]);
const NUMBER: Candidates = Candidates::new(&["number", "permanentNumber"]);
const NATIONALITY: Candidates = Candidates::new(&["nationality"]);
const DATE_OF_BIRTH: Candidates = Candidates::new(&["birthday", "dateOfBirth"]);
const WIKIPEDIA: Candidates = Candidates::new(&["url", "wikipedia"]);

/// Records nested under this key are unwrapped first (team driver listings)
const WRAPPER: Candidates = Candidates::new(&["driver"]);

/// Map a raw driver record; never fails
pub fn map_driver(raw: &Value) -> Driver {
    let raw = WRAPPER.object(raw).unwrap_or(raw);

    Driver {
        id: ID.text_or_empty(raw),
        name: NAME.text_or_empty(raw),
        surname: SURNAME.text_or_empty(raw),
        code: CODE.text(raw),
        number: NUMBER.resolve(raw, integer),
        nationality: NATIONALITY.text(raw),
        date_of_birth: DATE_OF_BIRTH.text(raw),
        wikipedia: WIKIPEDIA.text(raw),
    }
}
