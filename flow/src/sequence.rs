//! Sequential execution of deferred async tasks.
//!
//! Both runners enforce strict non-overlap: task *i + 1* is not invoked until
//! task *i*'s future has settled. In async Rust this is the natural shape of
//! awaiting in a loop, and the contract here makes it explicit: callers may
//! rely on it for operations that must not race, such as nonce-ordered
//! transaction submission.

use std::future::Future;
use std::hash::Hash;

use indexmap::IndexMap;

/// Runs deferred tasks one at a time, collecting results in input order.
///
/// Each task is a zero-argument closure producing a future; it is invoked
/// only when its turn comes, and never retained past its own step. The
/// result at position *i* is the resolved value of task *i*.
///
/// An empty input resolves immediately to an empty `Vec`. The first task
/// failure is returned as-is and no later task is invoked.
pub async fn all_sequential<I, F, Fut, T, E>(tasks: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let tasks = tasks.into_iter();
    let mut results = Vec::with_capacity(tasks.size_hint().0);
    for task in tasks {
        results.push(task().await?);
    }
    Ok(results)
}

/// Runs a key→task mapping one entry at a time, in insertion order.
///
/// The output carries exactly the input's keys, each mapped to its task's
/// resolved value. Execution order is the map's insertion order, so it is
/// deterministic and matches the order the caller declared.
///
/// Same non-overlap and fail-fast semantics as [`all_sequential`]; an empty
/// map resolves immediately to an empty map.
pub async fn all_sequential_named<K, F, Fut, T, E>(tasks: IndexMap<K, F>) -> Result<IndexMap<K, T>, E>
where
    K: Hash + Eq,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut results = IndexMap::with_capacity(tasks.len());
    for (key, task) in tasks {
        let value = task().await?;
        results.insert(key, value);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    use indexmap::IndexMap;

    use super::{all_sequential, all_sequential_named};

    #[tokio::test]
    async fn resolves_results_in_input_order() {
        let tasks = ["a", "b"].map(|value| move || async move { Ok::<_, ()>(value) });
        let results = all_sequential(tasks).await.unwrap();
        assert_eq!(results, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn empty_input_resolves_to_empty_vec() {
        let tasks: [fn() -> std::future::Ready<Result<&'static str, ()>>; 0] = [];
        let results = all_sequential(tasks).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn does_not_start_a_task_before_the_previous_settles() {
        let trace = Mutex::new(Vec::new());
        let tasks = ["a", "b"].map(|name| {
            let trace = &trace;
            move || async move {
                trace.lock().unwrap().push(format!("{name} start"));
                tokio::task::yield_now().await;
                trace.lock().unwrap().push(format!("{name} end"));
                Ok::<_, ()>(name)
            }
        });
        all_sequential(tasks).await.unwrap();
        assert_eq!(
            trace.into_inner().unwrap(),
            vec!["a start", "a end", "b start", "b end"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_execution_order_when_an_early_task_is_slow() {
        let trace = Mutex::new(Vec::new());
        let tasks = [("a", Duration::from_millis(300)), ("b", Duration::ZERO)].map(
            |(name, delay)| {
                let trace = &trace;
                move || async move {
                    tokio::time::sleep(delay).await;
                    trace.lock().unwrap().push(name);
                    Ok::<_, ()>(name)
                }
            },
        );
        let results = all_sequential(tasks).await.unwrap();
        assert_eq!(results, vec!["a", "b"]);
        assert_eq!(trace.into_inner().unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn first_failure_skips_remaining_tasks() {
        let invoked = AtomicU32::new(0);
        let tasks = (0..3).map(|i| {
            let invoked = &invoked;
            move || {
                invoked.fetch_add(1, Ordering::SeqCst);
                async move {
                    if i == 1 {
                        Err("task 1 failed")
                    } else {
                        Ok(i)
                    }
                }
            }
        });
        let err = all_sequential(tasks).await.unwrap_err();
        assert_eq!(err, "task 1 failed");
        assert_eq!(invoked.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn named_resolves_with_mapped_keys() {
        let tasks: IndexMap<_, _> = [("a", "ra"), ("b", "rb")]
            .into_iter()
            .map(|(key, value)| (key, move || async move { Ok::<_, ()>(value) }))
            .collect();
        let results = all_sequential_named(tasks).await.unwrap();
        assert_eq!(results, IndexMap::from([("a", "ra"), ("b", "rb")]));
    }

    #[tokio::test]
    async fn named_runs_entries_in_insertion_order() {
        let trace = Mutex::new(Vec::new());
        let mut tasks = IndexMap::new();
        // Insertion order deliberately disagrees with lexical key order.
        for key in ["z", "a", "m"] {
            let trace = &trace;
            tasks.insert(key, move || async move {
                trace.lock().unwrap().push(key);
                Ok::<_, ()>(key)
            });
        }
        let results = all_sequential_named(tasks).await.unwrap();
        assert_eq!(trace.into_inner().unwrap(), vec!["z", "a", "m"]);
        assert_eq!(
            results.keys().copied().collect::<Vec<_>>(),
            vec!["z", "a", "m"]
        );
    }

    #[tokio::test]
    async fn named_empty_map_resolves_to_empty_map() {
        let tasks: IndexMap<&str, fn() -> std::future::Ready<Result<&'static str, ()>>> =
            IndexMap::new();
        let results = all_sequential_named(tasks).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn named_first_failure_skips_remaining_entries() {
        let invoked = AtomicU32::new(0);
        let mut tasks = IndexMap::new();
        for key in ["a", "b", "c"] {
            let invoked = &invoked;
            tasks.insert(key, move || {
                invoked.fetch_add(1, Ordering::SeqCst);
                async move {
                    if key == "b" {
                        Err("b failed")
                    } else {
                        Ok(key)
                    }
                }
            });
        }
        let err = all_sequential_named(tasks).await.unwrap_err();
        assert_eq!(err, "b failed");
        assert_eq!(invoked.load(Ordering::SeqCst), 2);
    }
}
