/// Separator appended after every scalar token and between map keys and values.
pub const TOKEN_SEPARATOR: char = '-';

/// Separator between a label and its token (`rolling_type:OverrideScaling-`).
pub const LABEL_SEPARATOR: char = ':';

/// Separator used by joined string sets (`values:a,b,c-`).
pub const JOINED_SET_SEPARATOR: &str = ",";

/// FNV-1a 32-bit offset basis. Also the fingerprint of the empty canonical string.
pub const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
pub const FNV32_PRIME: u32 = 0x0100_0193;

/// Indentation width used when re-serializing embedded text.
pub const CANONICAL_INDENT: usize = 2;

/// Field that identifies a machine pool across plan/apply cycles.
pub const POOL_NAME_FIELD: &str = "name";
