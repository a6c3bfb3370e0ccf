//! Note id generation.
//!
//! Ids are seven lowercase base-36 characters drawn from the random bits of
//! a v4 UUID. Uniqueness is only guaranteed against the collection passed to
//! [`unique_id`].

use uuid::Uuid;

use crate::note::Note;

/// Length of generated note ids.
pub const ID_LEN: usize = 7;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a random id. Not checked against any collection.
pub fn generate_id() -> String {
    // The low 64 bits of a v4 UUID are random apart from the two variant bits
    // at the top, and seven base-36 digits only consume ~37 bits.
    let mut bits = Uuid::new_v4().as_u128();
    let mut id = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        id.push(ALPHABET[(bits % 36) as usize] as char);
        bits /= 36;
    }
    id
}

/// Generate an id that no note in `existing` already uses.
pub fn unique_id(existing: &[Note]) -> String {
    unique_id_with(existing, generate_id)
}

/// Draw ids from `generate` until one is not used by `existing`.
pub fn unique_id_with(existing: &[Note], mut generate: impl FnMut() -> String) -> String {
    loop {
        let id = generate();
        if !existing.iter().any(|note| note.id() == id) {
            return id;
        }
        log::debug!("event=id_collision id={}", id);
    }
}
