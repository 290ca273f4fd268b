use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // portfolios
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Portfolios::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(Portfolios::Personal).json_binary().not_null())
                    .col(ColumnDef::new(Portfolios::TechStack).json_binary().not_null())
                    .col(ColumnDef::new(Portfolios::Contact).json_binary().not_null())
                    .col(
                        ColumnDef::new(Portfolios::Active)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Portfolios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one active portfolio. Seeding and create-or-replace use this
        // index as their ON CONFLICT arbiter.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_portfolios_single_active
                ON portfolios (active)
                WHERE active;
                "#,
            )
            .await?;

        // =====================================================
        // portfolio_projects
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PortfolioProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioProjects::PortfolioId)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioProjects::Id).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioProjects::Position)
                            .big_integer()
                            .not_null()
                            .extra("GENERATED BY DEFAULT AS IDENTITY"),
                    )
                    .col(ColumnDef::new(PortfolioProjects::Name).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioProjects::Description)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioProjects::Details).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioProjects::Technologies)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioProjects::LiveLink).text())
                    .col(ColumnDef::new(PortfolioProjects::GithubLink).text())
                    .col(ColumnDef::new(PortfolioProjects::Image).text())
                    .col(
                        ColumnDef::new(PortfolioProjects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(PortfolioProjects::PortfolioId)
                            .col(PortfolioProjects::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_projects_portfolio_id")
                            .from(PortfolioProjects::Table, PortfolioProjects::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolio_projects_position
                ON portfolio_projects (portfolio_id, position);
                "#,
            )
            .await?;

        // =====================================================
        // portfolio_education
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PortfolioEducation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioEducation::PortfolioId)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioEducation::Id).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioEducation::Position)
                            .big_integer()
                            .not_null()
                            .extra("GENERATED BY DEFAULT AS IDENTITY"),
                    )
                    .col(ColumnDef::new(PortfolioEducation::Degree).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioEducation::Institution)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioEducation::GraduationYear)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioEducation::Status).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioEducation::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(PortfolioEducation::PortfolioId)
                            .col(PortfolioEducation::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_education_portfolio_id")
                            .from(PortfolioEducation::Table, PortfolioEducation::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioEducation::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioProjects::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_portfolios_single_active;")
            .await?;

        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    Personal,
    TechStack,
    Contact,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PortfolioProjects {
    Table,
    PortfolioId,
    Id,
    Position,
    Name,
    Description,
    Details,
    Technologies,
    LiveLink,
    GithubLink,
    Image,
    Featured,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PortfolioEducation {
    Table,
    PortfolioId,
    Id,
    Position,
    Degree,
    Institution,
    GraduationYear,
    Status,
    CreatedAt,
}
