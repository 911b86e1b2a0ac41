// crates/usecase/src/relative.rs
use fileentry_ports::filesystem::EntryHandle;
use fileentry_shared_kernel::{
    DomainError, DomainResult, ErrorContext, FileEntryDescriptor, RelativeEntry, Result, is_separator,
};

/// Strips `base` plus exactly one separator from the front of `target`.
///
/// `target` must begin with `base` and continue with `/` or `\`; anything else
/// is reported as a [`DomainError::PreconditionViolation`]. A target that is
/// only `base` and its separator yields an empty path.
pub fn relative_path<'t>(base: &str, target: &'t str) -> DomainResult<&'t str> {
    let violation = |reason: &str| DomainError::PreconditionViolation {
        base: base.to_string(),
        target: target.to_string(),
        reason: reason.to_string(),
    };

    let rest = target
        .strip_prefix(base)
        .ok_or_else(|| violation("target does not start with base"))?;
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if is_separator(c) => Ok(chars.as_str()),
        Some(_) => Err(violation("base is not followed by a separator")),
        None => Err(violation("target is the base itself")),
    }
}

/// Reads name, relative path and metadata for `target` below `base`.
pub fn relative_entry<H>(base: &str, target: &H) -> Result<RelativeEntry>
where
    H: EntryHandle + ?Sized,
{
    let path = relative_path(base, target.remote())?;
    let remote = target.remote();
    let is_directory = target
        .is_directory()
        .with_context(|| format!("reading type of '{remote}'"))?;
    let length = target
        .length()
        .with_context(|| format!("reading length of '{remote}'"))?;
    let last_modified = target
        .last_modified()
        .with_context(|| format!("reading modification time of '{remote}'"))?;

    Ok(RelativeEntry {
        name: target.name().to_string(),
        path: path.to_string(),
        is_directory,
        length,
        last_modified,
    })
}

/// [`relative_entry`] followed by the descriptor's normalizing constructor.
pub fn describe<H>(base: &str, target: &H) -> Result<FileEntryDescriptor>
where
    H: EntryHandle + ?Sized,
{
    relative_entry(base, target).map(FileEntryDescriptor::from)
}
