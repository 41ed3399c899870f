#![cfg(target_arch = "wasm32")]

use trancendos_frontend::store::{clear_stored_token, read_stored_token, write_stored_token};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn token_storage_round_trip() {
    clear_stored_token();
    assert!(read_stored_token().is_none());

    write_stored_token("tok-abc");
    assert_eq!(read_stored_token().as_deref(), Some("tok-abc"));

    clear_stored_token();
    assert!(read_stored_token().is_none());
    // Clearing twice is a no-op.
    clear_stored_token();
    assert!(read_stored_token().is_none());
}

#[wasm_bindgen_test]
fn empty_token_counts_as_logged_out() {
    write_stored_token("");
    assert!(read_stored_token().is_none());
    clear_stored_token();
}
