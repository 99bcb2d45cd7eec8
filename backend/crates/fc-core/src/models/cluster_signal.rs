/// What the cluster describer reports. Only meaningful while the stack is not updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterSignal {
    pub running_task_count: u32,
}
