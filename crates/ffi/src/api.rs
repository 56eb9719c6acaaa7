//! JSON and C FFI entry points.

use crate::types::*;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use boxpack_core::diagnostic::CollectingObserver;
use boxpack_core::solver::Solver;
use boxpack_core::{Error, Result};
use boxpack_packer::{Catalog, Packer};
use serde::Serialize;

/// Error codes.
pub const BOXPACK_OK: i32 = 0;
pub const BOXPACK_ERR_NULL_PTR: i32 = -1;
pub const BOXPACK_ERR_INVALID_JSON: i32 = -2;
pub const BOXPACK_ERR_PACK_FAILED: i32 = -3;
pub const BOXPACK_ERR_UNKNOWN: i32 = -99;

/// Packs a batch of orders described by a JSON request.
///
/// Never panics: parse and validation failures come back as a response with
/// `success == false`.
pub fn pack_json(json_str: &str) -> PackResponse {
    match pack_internal(json_str) {
        Ok(response) => response,
        Err(e) => {
            log::error!("pack request rejected: {}", e);
            PackResponse::failure(e.to_string())
        }
    }
}

/// Describes the standard catalog.
pub fn catalog_json() -> CatalogResponse {
    CatalogResponse {
        version: API_VERSION.to_string(),
        boxes: Catalog::standard().specs().to_vec(),
    }
}

fn pack_internal(json_str: &str) -> Result<PackResponse> {
    let request: PackRequest =
        serde_json::from_str(json_str).map_err(|e| Error::Serialization(e.to_string()))?;
    let envelope = request.into_envelope();

    let custom;
    let catalog = match envelope.catalog {
        Some(specs) => {
            custom = Catalog::from_specs(specs)?;
            &custom
        }
        None => Catalog::standard(),
    };

    if envelope.strict {
        for order in &envelope.orders {
            order.validate()?;
        }
    }

    let packer = Packer::new(catalog).with_config(envelope.config.unwrap_or_default());
    let mut observer = CollectingObserver::new();
    let results = packer.process_orders_observed(&envelope.orders, &mut observer);

    for diagnostic in &observer.diagnostics {
        log::warn!("{}", diagnostic);
    }

    Ok(PackResponse::success(results, observer.diagnostics))
}

/// Serializes `response` into a newly allocated C string stored in `result_ptr`.
unsafe fn write_response<T: Serialize>(
    response: &T,
    success: bool,
    result_ptr: *mut *mut c_char,
) -> i32 {
    let response_json = match serde_json::to_string(response) {
        Ok(s) => s,
        Err(_) => return BOXPACK_ERR_UNKNOWN,
    };

    match CString::new(response_json) {
        Ok(cstr) => {
            *result_ptr = cstr.into_raw();
            if success {
                BOXPACK_OK
            } else {
                BOXPACK_ERR_PACK_FAILED
            }
        }
        Err(_) => BOXPACK_ERR_UNKNOWN,
    }
}

/// Packs a batch of orders from JSON input.
///
/// # Safety
/// - `request_json` must be a valid null-terminated UTF-8 string
/// - `result_ptr` must be a valid pointer to a `*mut c_char`
/// - The caller must free the result string using `boxpack_free_string`
#[no_mangle]
pub unsafe extern "C" fn boxpack_pack(
    request_json: *const c_char,
    result_ptr: *mut *mut c_char,
) -> i32 {
    if request_json.is_null() || result_ptr.is_null() {
        return BOXPACK_ERR_NULL_PTR;
    }

    let json_str = match CStr::from_ptr(request_json).to_str() {
        Ok(s) => s,
        Err(_) => return BOXPACK_ERR_INVALID_JSON,
    };

    let response = pack_json(json_str);
    write_response(&response, response.success, result_ptr)
}

/// Writes the standard catalog as JSON.
///
/// # Safety
/// - `result_ptr` must be a valid pointer to a `*mut c_char`
/// - The caller must free the result string using `boxpack_free_string`
#[no_mangle]
pub unsafe extern "C" fn boxpack_catalog(result_ptr: *mut *mut c_char) -> i32 {
    if result_ptr.is_null() {
        return BOXPACK_ERR_NULL_PTR;
    }

    write_response(&catalog_json(), true, result_ptr)
}

/// Frees a string allocated by boxpack.
///
/// # Safety
/// - `ptr` must have been allocated by a boxpack function
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn boxpack_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Returns the API version from Cargo.toml.
///
/// The returned string is statically allocated and must not be freed.
#[no_mangle]
pub extern "C" fn boxpack_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
