//! Effect - a reusable, deferred asynchronous computation.
//!
//! An [`Effect<T, E>`] holds a producer: a zero-argument function that
//! returns a future resolving to `Ok(T)` or rejecting with `Err(E)`. Building
//! an effect never invokes the producer. Execution happens only in
//! [`Effect::run`], which should be called at the program's edge.
//!
//! # Re-running
//!
//! Every call to `run` invokes the producer anew. Nothing is cached, so two
//! runs of a shared effect perform the underlying work twice and may resolve
//! to different values. Callers that need exactly-once semantics must arrange
//! it inside the producer.
//!
//! # Examples
//!
//! ```rust
//! use effectum::effect::Effect;
//!
//! # futures::executor::block_on(async {
//! let effect: Effect<i32> = Effect::from_value(4)
//!     .chain(|x| Effect::from_value(x + 2))
//!     .chain(|x| Effect::from_value(x * 3))
//!     .chain(|x| Effect::from_value(x / 2));
//!
//! assert_eq!(effect.run().await.unwrap(), 9);
//! # });
//! ```
//!
//! # Recovery
//!
//! ```rust
//! use effectum::effect::Effect;
//!
//! # futures::executor::block_on(async {
//! let effect: Effect<i32> = Effect::<i32>::reject("service unavailable")
//!     .catch(|_| Effect::from_value(5));
//!
//! assert_eq!(effect.run().await.unwrap(), 5);
//! # });
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, LazyLock};

use futures::FutureExt;
use futures::future::{BoxFuture, ready};
use static_assertions::assert_impl_all;

use super::error::{BoxError, EffectError};
use crate::control::panic::{payload_message, resume_if_abort};

type Producer<T, E> = dyn Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync;

/// A deferred asynchronous computation producing `T` or rejecting with `E`.
///
/// # Type Parameters
///
/// - `T`: The value the effect resolves to.
/// - `E`: The error the effect rejects with. Defaults to [`BoxError`].
///
/// # Examples
///
/// ```rust
/// use effectum::effect::Effect;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// # futures::executor::block_on(async {
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
///
/// let effect: Effect<usize> = Effect::new(move || {
///     let counter = Arc::clone(&counter);
///     async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
/// });
///
/// // Nothing ran yet.
/// assert_eq!(calls.load(Ordering::SeqCst), 0);
///
/// assert_eq!(effect.run().await.unwrap(), 1);
/// assert_eq!(effect.run().await.unwrap(), 2);
/// # });
/// ```
#[must_use = "an effect does nothing until it is run"]
pub struct Effect<T, E = BoxError> {
    producer: Arc<Producer<T, E>>,
}

assert_impl_all!(Effect<i32>: Send, Sync, Clone);
assert_impl_all!(Effect<String, EffectError>: Send, Sync, Clone);

static UNIT: LazyLock<Effect<()>> = LazyLock::new(|| Effect::from_value(()));

impl Effect<()> {
    /// Returns the process-wide effect that resolves to `()`.
    ///
    /// Useful as a neutral starting point for a chain. Every call returns a
    /// handle to the same producer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::Effect;
    ///
    /// # futures::executor::block_on(async {
    /// let greeting = Effect::unit().chain(|()| Effect::from_value("hello"));
    /// assert_eq!(greeting.run().await.unwrap(), "hello");
    /// # });
    /// ```
    pub fn unit() -> Self {
        UNIT.clone()
    }
}

impl<T, E> Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an effect from a producer of futures.
    ///
    /// This is the canonical constructor. The producer is invoked once per
    /// [`Effect::run`], never at construction.
    pub fn new<P, Fut>(producer: P) -> Self
    where
        P: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            producer: Arc::new(move || producer().boxed()),
        }
    }

    /// Creates an effect from a synchronous, fallible function.
    ///
    /// The function runs when the effect runs, not before.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self::new(move || ready(function()))
    }

    /// Creates an effect that resolves to `value` on every run.
    pub fn from_value(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::new(move || ready(Ok(value.clone())))
    }

    /// Creates an effect that rejects with `error` on every run.
    pub fn fail(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move || ready(Err(error.clone())))
    }

    /// Creates an effect that rejects with [`EffectError::Failed`].
    ///
    /// This is the way to build a failing effect when `E` cannot be cloned,
    /// such as the default [`BoxError`].
    pub fn reject(message: impl Into<String>) -> Self
    where
        E: From<EffectError>,
    {
        let message: String = message.into();
        Self::new(move || ready(Err(EffectError::Failed(message.clone()).into())))
    }

    /// Creates an effect sharing the producer of `effect`.
    ///
    /// The result runs exactly what `effect` runs; it is not a wrapper around
    /// it.
    pub fn from_effect(effect: &Self) -> Self {
        effect.clone()
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Invokes the producer and returns its future.
    ///
    /// Each call is an independent execution; results are never cached.
    ///
    /// # Errors
    ///
    /// The future resolves to `Err(E)` when the producer, or any stage
    /// composed into it, rejects.
    pub fn run(&self) -> BoxFuture<'static, Result<T, E>> {
        tracing::trace!(effect = std::any::type_name::<T>(), "running effect");
        (self.producer)()
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Sequences another effect after this one.
    ///
    /// Running the result runs this effect, awaits its value, passes it to
    /// `mapper` and runs the effect `mapper` returns. `mapper` is never
    /// invoked before this effect resolves. The first rejection wins.
    pub fn chain<U, M>(self, mapper: M) -> Effect<U, E>
    where
        U: Send + 'static,
        M: Fn(T) -> Effect<U, E> + Send + Sync + 'static,
    {
        let producer = self.producer;
        let mapper = Arc::new(mapper);
        Effect::new(move || {
            let first = producer();
            let mapper = Arc::clone(&mapper);
            async move {
                match first.await {
                    Ok(value) => {
                        tracing::trace!("effect stage resolved, running next stage");
                        mapper(value).run().await
                    }
                    Err(error) => Err(error),
                }
            }
        })
    }

    /// Recovers from a rejection of this effect.
    ///
    /// On rejection, `handler` receives the error and the effect it returns
    /// runs in place of this one. On success `handler` is never invoked. A
    /// rejection of the recovery effect propagates unhandled.
    pub fn catch<F, H>(self, handler: H) -> Effect<T, F>
    where
        F: Send + 'static,
        H: Fn(E) -> Effect<T, F> + Send + Sync + 'static,
    {
        let producer = self.producer;
        let handler = Arc::new(handler);
        Effect::new(move || {
            let first = producer();
            let handler = Arc::clone(&handler);
            async move {
                match first.await {
                    Ok(value) => Ok(value),
                    Err(error) => {
                        tracing::trace!("effect rejected, running recovery");
                        handler(error).run().await
                    }
                }
            }
        })
    }

    /// Transforms the resolved value.
    pub fn map<U, M>(self, function: M) -> Effect<U, E>
    where
        U: Send + 'static,
        M: Fn(T) -> U + Send + Sync + 'static,
    {
        let producer = self.producer;
        let function = Arc::new(function);
        Effect::new(move || {
            let first = producer();
            let function = Arc::clone(&function);
            async move { first.await.map(|value| function(value)) }
        })
    }

    /// Transforms the rejection error.
    pub fn map_err<F, M>(self, function: M) -> Effect<T, F>
    where
        F: Send + 'static,
        M: Fn(E) -> F + Send + Sync + 'static,
    {
        let producer = self.producer;
        let function = Arc::new(function);
        Effect::new(move || {
            let first = producer();
            let function = Arc::clone(&function);
            async move { first.await.map_err(|error| function(error)) }
        })
    }

    /// Turns a panic inside the producer into a rejection.
    ///
    /// Both panics raised while invoking the producer and panics raised while
    /// polling its future become [`EffectError::Panicked`]. Aborts raised by
    /// [`panic`](crate::control::panic()) from a failed `unwrap` or `expect`
    /// are not contained: they resume unwinding out of the run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectum::effect::{Effect, EffectError};
    ///
    /// # futures::executor::block_on(async {
    /// let effect: Effect<i32, EffectError> = Effect::from_fn(|| -> Result<i32, EffectError> {
    ///     panic!("division by zero")
    /// })
    /// .catch_unwind();
    ///
    /// assert_eq!(
    ///     effect.run().await,
    ///     Err(EffectError::Panicked("division by zero".to_string()))
    /// );
    /// # });
    /// ```
    pub fn catch_unwind(self) -> Self
    where
        E: From<EffectError>,
    {
        let producer = self.producer;
        Self::new(move || {
            let producer = Arc::clone(&producer);
            AssertUnwindSafe(async move { producer().await })
                .catch_unwind()
                .map(|outcome| {
                    outcome.unwrap_or_else(|payload| {
                        let payload = resume_if_abort(payload);
                        let message = payload_message(payload.as_ref())
                            .unwrap_or("non-string panic payload")
                            .to_string();
                        Err(EffectError::Panicked(message).into())
                    })
                })
        })
    }
}

impl<T, E> Clone for Effect<T, E> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<T, E> fmt::Debug for Effect<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Effect")
            .field("output", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T, E> IntoFuture for Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = Result<T, E>;
    type IntoFuture = BoxFuture<'static, Result<T, E>>;

    /// Runs the effect, so `effect.await` is `effect.run().await`.
    fn into_future(self) -> Self::IntoFuture {
        self.run()
    }
}
