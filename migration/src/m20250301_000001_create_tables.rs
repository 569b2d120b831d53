use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Image).string().null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 课堂表
        manager
            .create_table(
                Table::create()
                    .table(Classrooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classrooms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classrooms::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Classrooms::Name).string().not_null())
                    .col(ColumnDef::new(Classrooms::Description).text().null())
                    .col(ColumnDef::new(Classrooms::Image).string().null())
                    .col(
                        ColumnDef::new(Classrooms::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classrooms::StartDate).date().not_null())
                    .col(ColumnDef::new(Classrooms::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Classrooms::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Classrooms::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classrooms::Table, Classrooms::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课堂时间段表
        manager
            .create_table(
                Table::create()
                    .table(ClassroomTimeSlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassroomTimeSlots::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassroomTimeSlots::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassroomTimeSlots::Day).string().not_null())
                    .col(
                        ColumnDef::new(ClassroomTimeSlots::StartTime)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomTimeSlots::EndTime)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomTimeSlots::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassroomTimeSlots::Table, ClassroomTimeSlots::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课堂成员表
        manager
            .create_table(
                Table::create()
                    .table(ClassroomMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassroomMembers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassroomMembers::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomMembers::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassroomMembers::Role).string().not_null())
                    .col(
                        ColumnDef::new(ClassroomMembers::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassroomMembers::Table, ClassroomMembers::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassroomMembers::Table, ClassroomMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 邀请表
        manager
            .create_table(
                Table::create()
                    .table(Invitations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invitations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invitations::SenderId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Invitations::ReceiverEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Invitations::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Invitations::Role).string().not_null())
                    .col(
                        ColumnDef::new(Invitations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Invitations::Table, Invitations::SenderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Invitations::Table, Invitations::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 外部日历凭据表
        manager
            .create_table(
                Table::create()
                    .table(CalendarCredentials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CalendarCredentials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CalendarCredentials::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CalendarCredentials::Provider)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CalendarCredentials::AccessToken)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CalendarCredentials::ExpiresAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CalendarCredentials::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CalendarCredentials::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CalendarCredentials::Table, CalendarCredentials::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 成员唯一索引：同一用户在同一课堂只能有一条记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_classroom_members_classroom_user")
                    .table(ClassroomMembers::Table)
                    .col(ClassroomMembers::ClassroomId)
                    .col(ClassroomMembers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classroom_members_user_id")
                    .table(ClassroomMembers::Table)
                    .col(ClassroomMembers::UserId)
                    .to_owned(),
            )
            .await?;

        // 邀请唯一索引：同一发送者对同一邮箱在同一课堂只保留一条待处理邀请
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_invitations_sender_receiver_classroom")
                    .table(Invitations::Table)
                    .col(Invitations::SenderId)
                    .col(Invitations::ReceiverEmail)
                    .col(Invitations::ClassroomId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_invitations_receiver_email")
                    .table(Invitations::Table)
                    .col(Invitations::ReceiverEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classroom_time_slots_classroom_id")
                    .table(ClassroomTimeSlots::Table)
                    .col(ClassroomTimeSlots::ClassroomId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(CalendarCredentials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Invitations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassroomMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassroomTimeSlots::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classrooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    Name,
    Image,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Classrooms {
    #[sea_orm(iden = "classrooms")]
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    Image,
    Code,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassroomTimeSlots {
    #[sea_orm(iden = "classroom_time_slots")]
    Table,
    Id,
    ClassroomId,
    Day,
    StartTime,
    EndTime,
    Position,
}

#[derive(DeriveIden)]
enum ClassroomMembers {
    #[sea_orm(iden = "classroom_members")]
    Table,
    Id,
    ClassroomId,
    UserId,
    Role,
    JoinedAt,
}

#[derive(DeriveIden)]
enum Invitations {
    #[sea_orm(iden = "invitations")]
    Table,
    Id,
    SenderId,
    ReceiverEmail,
    ClassroomId,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CalendarCredentials {
    #[sea_orm(iden = "calendar_credentials")]
    Table,
    Id,
    UserId,
    Provider,
    AccessToken,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}
