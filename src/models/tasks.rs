use crate::error::{DecodeError, Result};
use crate::models::common::NameIdentifier;
use crate::wire::{
    type_mismatch, FromWire, SemanticKind, ToWire, WireFields, WireObject, WireValue,
};
use chrono::{DateTime, Utc};

/// Task type. Load-bearing: its value routes decoding of the sibling
/// `Parameter` payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScheduledTaskType {
    CloudScript,
    ActionsOnPlayerSegment,
    /// Symbol added service-side after this SDK was generated.
    Unknown(String),
}

impl ScheduledTaskType {
    pub fn as_symbol(&self) -> &str {
        match self {
            ScheduledTaskType::CloudScript => "CloudScript",
            ScheduledTaskType::ActionsOnPlayerSegment => "ActionsOnPlayerSegment",
            ScheduledTaskType::Unknown(symbol) => symbol,
        }
    }

    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "CloudScript" => ScheduledTaskType::CloudScript,
            "ActionsOnPlayerSegment" => ScheduledTaskType::ActionsOnPlayerSegment,
            other => ScheduledTaskType::Unknown(other.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ScheduledTaskType::Unknown(_))
    }

    /// Strict form for positions where the symbol must be recognized.
    /// Unlike the lenient decode, an unknown symbol is an error here.
    pub fn from_wire_strict(value: &WireValue, path: &str) -> Result<Self> {
        let symbol = value
            .as_str()
            .ok_or_else(|| type_mismatch(path, SemanticKind::EnumSymbol, value))?;
        match Self::from_symbol(symbol) {
            ScheduledTaskType::Unknown(symbol) => Err(DecodeError::MalformedEnumValue {
                path: path.to_string(),
                symbol,
            }),
            known => Ok(known),
        }
    }
}

impl ToWire for ScheduledTaskType {
    fn to_wire(&self) -> WireValue {
        WireValue::String(self.as_symbol().to_string())
    }
}

impl FromWire for ScheduledTaskType {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let symbol = value
            .as_str()
            .ok_or_else(|| type_mismatch(path, SemanticKind::EnumSymbol, value))?;
        Ok(Self::from_symbol(symbol))
    }
}

/// Status of a task instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskInstanceStatus {
    Succeeded,
    Starting,
    InProgress,
    Failed,
    Aborted,
    Pending,
    /// Symbol added service-side after this SDK was generated.
    Unknown(String),
}

impl TaskInstanceStatus {
    pub fn as_symbol(&self) -> &str {
        match self {
            TaskInstanceStatus::Succeeded => "Succeeded",
            TaskInstanceStatus::Starting => "Starting",
            TaskInstanceStatus::InProgress => "InProgress",
            TaskInstanceStatus::Failed => "Failed",
            TaskInstanceStatus::Aborted => "Aborted",
            TaskInstanceStatus::Pending => "Pending",
            TaskInstanceStatus::Unknown(symbol) => symbol,
        }
    }

    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "Succeeded" => TaskInstanceStatus::Succeeded,
            "Starting" => TaskInstanceStatus::Starting,
            "InProgress" => TaskInstanceStatus::InProgress,
            "Failed" => TaskInstanceStatus::Failed,
            "Aborted" => TaskInstanceStatus::Aborted,
            "Pending" => TaskInstanceStatus::Pending,
            other => TaskInstanceStatus::Unknown(other.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TaskInstanceStatus::Unknown(_))
    }
}

impl ToWire for TaskInstanceStatus {
    fn to_wire(&self) -> WireValue {
        WireValue::String(self.as_symbol().to_string())
    }
}

impl FromWire for TaskInstanceStatus {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let symbol = value
            .as_str()
            .ok_or_else(|| type_mismatch(path, SemanticKind::EnumSymbol, value))?;
        let parsed = Self::from_symbol(symbol);
        if parsed.is_unknown() {
            log::warn!(
                "unrecognized TaskInstanceStatus symbol '{}' at '{}'",
                symbol,
                path
            );
        }
        Ok(parsed)
    }
}

/// Parameters for a CloudScript task.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CloudScriptTaskParameter {
    /// Argument passed to the function; its shape is up to the script.
    pub argument: Option<WireValue>,
    /// Name of the CloudScript function to execute.
    pub function_name: Option<String>,
}

impl ToWire for CloudScriptTaskParameter {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Argument", &self.argument)
            .optional("FunctionName", &self.function_name)
            .into_value()
    }
}

impl FromWire for CloudScriptTaskParameter {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            argument: obj.optional("Argument")?,
            function_name: obj.optional("FunctionName")?,
        })
    }
}

/// Parameters for an actions-on-players-in-segment task.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionsOnPlayersInSegmentTaskParameter {
    /// Action to perform on each player in the segment.
    pub action_id: Option<String>,
    /// Segment to perform actions on.
    pub segment_id: Option<String>,
}

impl ToWire for ActionsOnPlayersInSegmentTaskParameter {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("ActionId", &self.action_id)
            .optional("SegmentId", &self.segment_id)
            .into_value()
    }
}

impl FromWire for ActionsOnPlayersInSegmentTaskParameter {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            action_id: obj.optional("ActionId")?,
            segment_id: obj.optional("SegmentId")?,
        })
    }
}

/// Task parameter payload, routed by the sibling task-type discriminator.
///
/// The shape is resolved only once both pieces of context are available;
/// a payload whose discriminator is not in the known set is retained
/// verbatim so forward-compatible data survives a round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskParameter {
    CloudScript(CloudScriptTaskParameter),
    ActionsOnPlayerSegment(ActionsOnPlayersInSegmentTaskParameter),
    /// Raw payload kept for an unrecognized or missing task type.
    Opaque(WireValue),
}

impl TaskParameter {
    /// Route a payload by discriminator. Unknown or missing discriminators
    /// keep the payload opaque instead of failing the enclosing decode.
    pub fn decode(
        task_type: Option<&ScheduledTaskType>,
        payload: &WireValue,
        path: &str,
    ) -> Result<Self> {
        match task_type {
            Some(ScheduledTaskType::CloudScript) => {
                CloudScriptTaskParameter::from_wire(payload, path).map(TaskParameter::CloudScript)
            }
            Some(ScheduledTaskType::ActionsOnPlayerSegment) => {
                ActionsOnPlayersInSegmentTaskParameter::from_wire(payload, path)
                    .map(TaskParameter::ActionsOnPlayerSegment)
            }
            Some(ScheduledTaskType::Unknown(symbol)) => {
                log::debug!(
                    "retaining opaque payload at '{}' for unrecognized task type '{}'",
                    path,
                    symbol
                );
                Ok(TaskParameter::Opaque(payload.clone()))
            }
            None => Ok(TaskParameter::Opaque(payload.clone())),
        }
    }

    /// Route a payload by discriminator, failing on symbols outside the
    /// known set instead of retaining the payload opaquely.
    pub fn decode_strict(
        task_type: &ScheduledTaskType,
        payload: &WireValue,
        path: &str,
    ) -> Result<Self> {
        match task_type {
            ScheduledTaskType::Unknown(symbol) => Err(DecodeError::UnknownDiscriminator {
                path: path.to_string(),
                symbol: symbol.clone(),
            }),
            known => Self::decode(Some(known), payload, path),
        }
    }

    /// Registry lookup from discriminator to the expected payload shape.
    pub fn expected_shape(task_type: &ScheduledTaskType) -> Option<&'static str> {
        match task_type {
            ScheduledTaskType::CloudScript => Some("CloudScriptTaskParameter"),
            ScheduledTaskType::ActionsOnPlayerSegment => {
                Some("ActionsOnPlayersInSegmentTaskParameter")
            }
            ScheduledTaskType::Unknown(_) => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, TaskParameter::Opaque(_))
    }
}

impl ToWire for TaskParameter {
    fn to_wire(&self) -> WireValue {
        match self {
            TaskParameter::CloudScript(parameter) => parameter.to_wire(),
            TaskParameter::ActionsOnPlayerSegment(parameter) => parameter.to_wire(),
            TaskParameter::Opaque(raw) => raw.clone(),
        }
    }
}

/// A scheduled task definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTask {
    pub description: Option<String>,
    /// Whether the schedule is active; inactive schedules never trigger.
    pub is_active: Option<bool>,
    /// UTC time of the last run.
    pub last_run_time: Option<DateTime<Utc>>,
    /// Name of the task, unique within the title. Always present.
    pub name: String,
    /// UTC time of the next run.
    pub next_run_time: Option<DateTime<Utc>>,
    /// Payload whose shape depends on `task_type`.
    pub parameter: Option<TaskParameter>,
    /// Cron expression for the run schedule, in UTC.
    pub schedule: Option<String>,
    pub task_id: Option<String>,
    pub task_type: Option<ScheduledTaskType>,
}

impl ScheduledTask {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            is_active: None,
            last_run_time: None,
            name: name.into(),
            next_run_time: None,
            parameter: None,
            schedule: None,
            task_id: None,
            task_type: None,
        }
    }
}

impl ToWire for ScheduledTask {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Description", &self.description)
            .optional("IsActive", &self.is_active)
            .optional("LastRunTime", &self.last_run_time)
            .field("Name", &self.name)
            .optional("NextRunTime", &self.next_run_time)
            .optional("Parameter", &self.parameter)
            .optional("Schedule", &self.schedule)
            .optional("TaskId", &self.task_id)
            .optional("Type", &self.task_type)
            .into_value()
    }
}

impl FromWire for ScheduledTask {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        // Discriminator first: Parameter decoding depends on it.
        let task_type: Option<ScheduledTaskType> = obj.optional("Type")?;
        let parameter = match obj.raw("Parameter") {
            None | Some(WireValue::Null) => None,
            Some(payload) => Some(TaskParameter::decode(
                task_type.as_ref(),
                payload,
                &obj.field_path("Parameter"),
            )?),
        };
        Ok(Self {
            description: obj.optional("Description")?,
            is_active: obj.optional("IsActive")?,
            last_run_time: obj.optional("LastRunTime")?,
            name: obj.required("Name")?,
            next_run_time: obj.optional("NextRunTime")?,
            parameter,
            schedule: obj.optional("Schedule")?,
            task_id: obj.optional("TaskId")?,
            task_type,
        })
    }
}

/// Creates a new CloudScript task.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateCloudScriptTaskRequest {
    pub description: Option<String>,
    pub is_active: Option<bool>,
    /// Name of the task, unique within the title.
    pub name: Option<String>,
    pub parameter: Option<CloudScriptTaskParameter>,
    /// Cron expression for the run schedule, in UTC.
    pub schedule: Option<String>,
}

impl ToWire for CreateCloudScriptTaskRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Description", &self.description)
            .optional("IsActive", &self.is_active)
            .optional("Name", &self.name)
            .optional("Parameter", &self.parameter)
            .optional("Schedule", &self.schedule)
            .into_value()
    }
}

impl FromWire for CreateCloudScriptTaskRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            description: obj.optional("Description")?,
            is_active: obj.optional("IsActive")?,
            name: obj.optional("Name")?,
            parameter: obj.optional("Parameter")?,
            schedule: obj.optional("Schedule")?,
        })
    }
}

/// Creates a new actions-on-players-in-segment task.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateActionsOnPlayerSegmentTaskRequest {
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub name: Option<String>,
    pub parameter: Option<ActionsOnPlayersInSegmentTaskParameter>,
    pub schedule: Option<String>,
}

impl ToWire for CreateActionsOnPlayerSegmentTaskRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Description", &self.description)
            .optional("IsActive", &self.is_active)
            .optional("Name", &self.name)
            .optional("Parameter", &self.parameter)
            .optional("Schedule", &self.schedule)
            .into_value()
    }
}

impl FromWire for CreateActionsOnPlayerSegmentTaskRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            description: obj.optional("Description")?,
            is_active: obj.optional("IsActive")?,
            name: obj.optional("Name")?,
            parameter: obj.optional("Parameter")?,
            schedule: obj.optional("Schedule")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateTaskResult {
    pub task_id: Option<String>,
}

impl ToWire for CreateTaskResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("TaskId", &self.task_id)
            .into_value()
    }
}

impl FromWire for CreateTaskResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            task_id: obj.optional("TaskId")?,
        })
    }
}

/// Updates an existing task. The parameter payload is routed by the
/// request's own `Type` field, exactly like `ScheduledTask`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateTaskRequest {
    pub description: Option<String>,
    /// Task to update, by ID or by name.
    pub identifier: Option<NameIdentifier>,
    pub is_active: Option<bool>,
    pub name: Option<String>,
    pub parameter: Option<TaskParameter>,
    pub schedule: Option<String>,
    pub task_type: Option<ScheduledTaskType>,
}

impl ToWire for UpdateTaskRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Description", &self.description)
            .optional("Identifier", &self.identifier)
            .optional("IsActive", &self.is_active)
            .optional("Name", &self.name)
            .optional("Parameter", &self.parameter)
            .optional("Schedule", &self.schedule)
            .optional("Type", &self.task_type)
            .into_value()
    }
}

impl FromWire for UpdateTaskRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        let task_type: Option<ScheduledTaskType> = obj.optional("Type")?;
        let parameter = match obj.raw("Parameter") {
            None | Some(WireValue::Null) => None,
            Some(payload) => Some(TaskParameter::decode(
                task_type.as_ref(),
                payload,
                &obj.field_path("Parameter"),
            )?),
        };
        Ok(Self {
            description: obj.optional("Description")?,
            identifier: obj.optional("Identifier")?,
            is_active: obj.optional("IsActive")?,
            name: obj.optional("Name")?,
            parameter,
            schedule: obj.optional("Schedule")?,
            task_type,
        })
    }
}

/// Deletes a task by ID or name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteTaskRequest {
    pub identifier: Option<NameIdentifier>,
}

impl ToWire for DeleteTaskRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Identifier", &self.identifier)
            .into_value()
    }
}

impl FromWire for DeleteTaskRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            identifier: obj.optional("Identifier")?,
        })
    }
}

/// Runs a task immediately, by ID or name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunTaskRequest {
    pub identifier: Option<NameIdentifier>,
}

impl ToWire for RunTaskRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Identifier", &self.identifier)
            .into_value()
    }
}

impl FromWire for RunTaskRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            identifier: obj.optional("Identifier")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunTaskResult {
    /// Instance started by the run; usable with the task-instance queries.
    pub task_instance_id: Option<String>,
}

impl ToWire for RunTaskResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("TaskInstanceId", &self.task_instance_id)
            .into_value()
    }
}

impl FromWire for RunTaskResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            task_instance_id: obj.optional("TaskInstanceId")?,
        })
    }
}

/// Queries task definitions, optionally narrowed to one task.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetTasksRequest {
    pub identifier: Option<NameIdentifier>,
}

impl ToWire for GetTasksRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Identifier", &self.identifier)
            .into_value()
    }
}

impl FromWire for GetTasksRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            identifier: obj.optional("Identifier")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetTasksResult {
    /// Matching tasks; empty when none match.
    pub tasks: Option<Vec<ScheduledTask>>,
}

impl ToWire for GetTasksResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new().optional("Tasks", &self.tasks).into_value()
    }
}

impl FromWire for GetTasksResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            tasks: obj.optional("Tasks")?,
        })
    }
}

/// Aborts a running task instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AbortTaskInstanceRequest {
    pub task_instance_id: Option<String>,
}

impl ToWire for AbortTaskInstanceRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("TaskInstanceId", &self.task_instance_id)
            .into_value()
    }
}

impl FromWire for AbortTaskInstanceRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            task_instance_id: obj.optional("TaskInstanceId")?,
        })
    }
}

/// Status summary of a task instance, common to all task types.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskInstanceBasicSummary {
    /// UTC timestamp when the instance completed.
    pub completed_at: Option<DateTime<Utc>>,
    pub estimated_seconds_remaining: Option<f64>,
    pub percent_complete: Option<f64>,
    /// User who scheduled the instance, when started manually.
    pub scheduled_by_user_id: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub status: Option<TaskInstanceStatus>,
    /// Task this instance belongs to.
    pub task_identifier: Option<NameIdentifier>,
    /// ID of the instance. Always present.
    pub task_instance_id: String,
    pub task_type: Option<ScheduledTaskType>,
}

impl ToWire for TaskInstanceBasicSummary {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CompletedAt", &self.completed_at)
            .optional(
                "EstimatedSecondsRemaining",
                &self.estimated_seconds_remaining,
            )
            .optional("PercentComplete", &self.percent_complete)
            .optional("ScheduledByUserId", &self.scheduled_by_user_id)
            .optional("StartedAt", &self.started_at)
            .optional("Status", &self.status)
            .optional("TaskIdentifier", &self.task_identifier)
            .field("TaskInstanceId", &self.task_instance_id)
            .optional("Type", &self.task_type)
            .into_value()
    }
}

impl FromWire for TaskInstanceBasicSummary {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            completed_at: obj.optional("CompletedAt")?,
            estimated_seconds_remaining: obj.optional("EstimatedSecondsRemaining")?,
            percent_complete: obj.optional("PercentComplete")?,
            scheduled_by_user_id: obj.optional("ScheduledByUserId")?,
            started_at: obj.optional("StartedAt")?,
            status: obj.optional("Status")?,
            task_identifier: obj.optional("TaskIdentifier")?,
            task_instance_id: obj.required("TaskInstanceId")?,
            task_type: obj.optional("Type")?,
        })
    }
}

/// Queries task instances, filtered by time range, status or task.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetTaskInstancesRequest {
    /// Range-from filter on the instances' StartedAt timestamp.
    pub started_at_range_from: Option<DateTime<Utc>>,
    /// Range-to filter on the instances' StartedAt timestamp.
    pub started_at_range_to: Option<DateTime<Utc>>,
    pub status_filter: Option<TaskInstanceStatus>,
    /// Task whose instances are queried; all tasks when omitted.
    pub task_identifier: Option<NameIdentifier>,
}

impl ToWire for GetTaskInstancesRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("StartedAtRangeFrom", &self.started_at_range_from)
            .optional("StartedAtRangeTo", &self.started_at_range_to)
            .optional("StatusFilter", &self.status_filter)
            .optional("TaskIdentifier", &self.task_identifier)
            .into_value()
    }
}

impl FromWire for GetTaskInstancesRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            started_at_range_from: obj.optional("StartedAtRangeFrom")?,
            started_at_range_to: obj.optional("StartedAtRangeTo")?,
            status_filter: obj.optional("StatusFilter")?,
            task_identifier: obj.optional("TaskIdentifier")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetTaskInstancesResult {
    /// Basic summaries of the matching instances; empty when none match.
    pub summaries: Option<Vec<TaskInstanceBasicSummary>>,
}

impl ToWire for GetTaskInstancesResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Summaries", &self.summaries)
            .into_value()
    }
}

impl FromWire for GetTaskInstancesResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            summaries: obj.optional("Summaries")?,
        })
    }
}
