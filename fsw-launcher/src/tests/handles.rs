use crate::supervisor::{
    LaunchPlan, ServiceHandles, ServiceProcess, ServiceRole, ServiceSpawner,
};
use crate::tests::{Event, FakeSpawner, Recorder};

use std::path::PathBuf;

use googletest::assert_that;
use googletest::prelude::eq;

fn fake_process(recorder: &Recorder, role: ServiceRole) -> Box<dyn ServiceProcess> {
    let spawner = FakeSpawner::new(recorder.clone());
    spawner
        .spawn(&LaunchPlan {
            role,
            program: PathBuf::from("python"),
            args: vec![],
            cwd: PathBuf::from("."),
        })
        .unwrap()
}

// =========================================================================
// Service handles - fixed two-slot ownership
// =========================================================================

#[test]
fn given_empty_handles_when_counted_then_zero() {
    let handles = ServiceHandles::new();

    assert_that!(handles.created_count(), eq(0));
    assert_that!(handles.contains(ServiceRole::Backend), eq(false));
    assert_that!(handles.contains(ServiceRole::Web), eq(false));
}

#[test]
fn given_backend_only_when_drained_then_single_backend_entry() {
    // Given
    let recorder = Recorder::default();
    let mut handles = ServiceHandles::new();
    handles.insert(ServiceRole::Backend, fake_process(&recorder, ServiceRole::Backend));

    // When
    let drained = handles.drain();

    // Then
    assert_that!(drained.len(), eq(1));
    assert_that!(drained[0].0, eq(ServiceRole::Backend));
    assert_that!(drained[0].1.pid(), eq(Some(4242)));
    assert_that!(handles.created_count(), eq(0));
}

#[test]
fn given_both_handles_when_drained_then_web_first() {
    // Given
    let recorder = Recorder::default();
    let mut handles = ServiceHandles::new();
    handles.insert(ServiceRole::Backend, fake_process(&recorder, ServiceRole::Backend));
    handles.insert(ServiceRole::Web, fake_process(&recorder, ServiceRole::Web));
    assert_that!(handles.created_count(), eq(2));

    // When
    let drained = handles.drain();

    // Then - teardown order is the reverse of launch order
    let roles: Vec<_> = drained.iter().map(|(role, _)| *role).collect();
    assert_that!(roles, eq(&vec![ServiceRole::Web, ServiceRole::Backend]));
}

#[test]
fn given_drained_handles_when_drained_again_then_empty() {
    // Given
    let recorder = Recorder::default();
    let mut handles = ServiceHandles::new();
    handles.insert(ServiceRole::Web, fake_process(&recorder, ServiceRole::Web));
    handles.drain();

    // When
    let drained = handles.drain();

    // Then
    assert_that!(drained.len(), eq(0));
    // Spawning recorded once per insert, nothing else
    assert_that!(recorder.events(), eq(&vec![Event::Spawned(ServiceRole::Web)]));
}
