//! 预导入模块，方便使用

pub use super::calendar_credentials::{
    ActiveModel as CalendarCredentialActiveModel, Entity as CalendarCredentials,
    Model as CalendarCredentialModel,
};
pub use super::classroom_members::{
    ActiveModel as ClassroomMemberActiveModel, Entity as ClassroomMembers,
    Model as ClassroomMemberModel,
};
pub use super::classroom_time_slots::{
    ActiveModel as TimeSlotActiveModel, Entity as ClassroomTimeSlots, Model as TimeSlotModel,
};
pub use super::classrooms::{
    ActiveModel as ClassroomActiveModel, Entity as Classrooms, Model as ClassroomModel,
};
pub use super::comments::{ActiveModel as CommentActiveModel, Entity as Comments, Model as CommentModel};
pub use super::files::{ActiveModel as FileActiveModel, Entity as Files, Model as FileModel};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::invitations::{
    ActiveModel as InvitationActiveModel, Entity as Invitations, Model as InvitationModel,
};
pub use super::posts::{ActiveModel as PostActiveModel, Entity as Posts, Model as PostModel};
pub use super::sections::{ActiveModel as SectionActiveModel, Entity as Sections, Model as SectionModel};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
