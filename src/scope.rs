use std::{
    io::Error,
    ops::{Deref, DerefMut},
};

use log::error;

use crate::files::Close;

/// Closes the handle it owns when it goes out of scope.
///
/// Only open handles can be wrapped, so a failed open never leads to a
/// close. Guards declared in one scope are dropped, and so closed, in
/// reverse order of declaration. A close failure on drop is logged and
/// never replaces the error that ended the scope early. When the scope
/// succeeds, call `close` so the failure reaches the caller instead.
pub struct Closing<T>
where
    T: Close,
{
    handle: Option<T>,
}

impl<T> Closing<T>
where
    T: Close,
{
    pub fn new(handle: T) -> Self {
        Closing {
            handle: Some(handle),
        }
    }

    /// Close the handle now and report how that went.
    ///
    /// Use this on the path where the scope's work succeeded, so a failing
    /// close is not lost.
    pub fn close(mut self) -> Result<(), Error> {
        match self.handle.take() {
            Some(handle) => handle.close(),
            None => Ok(()),
        }
    }
}

impl<T> From<T> for Closing<T>
where
    T: Close,
{
    fn from(handle: T) -> Self {
        Closing::new(handle)
    }
}

impl<T> Deref for Closing<T>
where
    T: Close,
{
    type Target = T;

    fn deref(&self) -> &T {
        self.handle.as_ref().expect("handle is only taken when closing")
    }
}

impl<T> DerefMut for Closing<T>
where
    T: Close,
{
    fn deref_mut(&mut self) -> &mut T {
        self.handle.as_mut().expect("handle is only taken when closing")
    }
}

impl<T> Drop for Closing<T>
where
    T: Close,
{
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.close() {
                error!("Failed to close handle on scope exit: {}", e);
            }
        }
    }
}
