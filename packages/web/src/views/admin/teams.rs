use api::{Team, TeamPayload};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, Card, ConfirmDialog, Field, FullPageSpinner, Input, Modal, Pagination,
    Spinner,
};
use ui::crud::{apply_created, apply_deleted, apply_updated, CreateOutcome, DeleteConfirmation, FormMode, Phase};
use ui::icons::{FaPen, FaPlus, FaTrash};
use ui::listing::{clamp_page, filter_teams, format_date, paginate};
use ui::{use_api, use_reporter, Client, Icon, Reporter};

async fn load(client: &Client, reporter: Reporter, mut teams: Signal<Vec<Team>>) {
    match client.list_teams().await {
        Ok(list) => teams.set(list),
        Err(e) => reporter.error_with("Failed to load teams", &e),
    }
}

#[component]
pub fn Teams() -> Element {
    let client = use_api();
    let reporter = use_reporter();

    let mut teams = use_signal(Vec::<Team>::new);
    let mut phase = use_signal(|| Phase::Loading);
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut mode = use_signal(|| Option::<FormMode>::None);
    let mut form = use_signal(TeamPayload::default);
    let mut deleting = use_signal(DeleteConfirmation::<Team>::default);

    use_hook({
        let client = client.clone();
        move || {
            spawn(async move {
                load(&client, reporter, teams).await;
                phase.set(Phase::Ready);
            });
        }
    });

    let submit = {
        let client = client.clone();
        move |_| {
            let Some(current) = mode() else { return };
            let payload = form();
            if let Err(e) = payload.validate() {
                reporter.error(&e);
                return;
            }
            let client = client.clone();
            spawn(async move {
                phase.set(Phase::Submitting);
                match current {
                    FormMode::Create => match client.create_team(&payload).await {
                        Ok(echoed) => {
                            reporter.success("Team created successfully");
                            if apply_created(&mut *teams.write(), echoed) == CreateOutcome::Refetch {
                                load(&client, reporter, teams).await;
                            }
                        }
                        Err(e) => reporter.error_with("Failed to create team", &e),
                    },
                    FormMode::Edit(id) => match client.update_team(id, &payload).await {
                        Ok(echoed) => {
                            let existing = teams.peek().iter().find(|t| t.team_id == id).cloned();
                            let updated = echoed.or_else(|| existing.map(|t| payload.apply(&t)));
                            if let Some(updated) = updated {
                                apply_updated(&mut *teams.write(), updated);
                            }
                            reporter.success("Team updated successfully");
                        }
                        Err(e) => reporter.error_with("Failed to update team", &e),
                    },
                }
                mode.set(None);
                phase.set(Phase::Ready);
            });
        }
    };

    let confirm_delete = {
        let client = client.clone();
        move |_| {
            let Some(target) = deleting.write().confirm() else { return };
            let client = client.clone();
            spawn(async move {
                phase.set(Phase::Submitting);
                match client.delete_team(target.team_id).await {
                    Ok(()) => {
                        apply_deleted(&mut *teams.write(), target.team_id);
                        reporter.success("Team deleted successfully");
                    }
                    Err(e) => reporter.error_with("Failed to delete team", &e),
                }
                phase.set(Phase::Ready);
            });
        }
    };

    if phase() == Phase::Loading {
        return rsx! { FullPageSpinner {} };
    }

    let filtered = filter_teams(&teams.read(), &search());
    let current_page = clamp_page(page(), filtered.len());
    let rows = paginate(&filtered, current_page);
    let busy = phase() == Phase::Submitting;
    let delete_name = deleting.read().target().map(|t| t.team_name.clone());

    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                h1 { "Teams" }
                Button {
                    onclick: move |_| {
                        form.set(TeamPayload::default());
                        mode.set(Some(FormMode::Create));
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Team"
                }
            }

            Card {
                title: "Team Management",
                description: "View and manage teams",
                div {
                    class: "toolbar",
                    Input {
                        id: "team-search",
                        placeholder: "Search teams...",
                        value: search(),
                        oninput: move |v| {
                            search.set(v);
                            page.set(1);
                        },
                    }
                }
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Team Name" }
                            th { "Created" }
                            th { "Updated" }
                            th { class: "actions", "Actions" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: 5, class: "empty", "No teams found" } }
                        }
                        for team in rows {
                            tr {
                                key: "{team.team_id}",
                                td { "{team.team_id}" }
                                td { "{team.team_name}" }
                                td { {team.created_at.map(format_date).unwrap_or_else(|| "-".into())} }
                                td { {team.updated_at.map(format_date).unwrap_or_else(|| "-".into())} }
                                td {
                                    class: "actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Edit",
                                        onclick: {
                                            let team = team.clone();
                                            move |_| {
                                                form.set(TeamPayload { team_name: team.team_name.clone() });
                                                mode.set(Some(FormMode::Edit(team.team_id)));
                                            }
                                        },
                                        Icon { icon: FaPen, width: 14, height: 14 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Delete",
                                        onclick: {
                                            let team = team.clone();
                                            move |_| deleting.write().request(team.clone())
                                        },
                                        Icon { icon: FaTrash, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }
                Pagination { len: filtered.len(), page }
            }

            if let Some(current) = mode() {
                Modal {
                    title: (if current == FormMode::Create { "Add Team" } else { "Edit Team" }).to_string(),
                    on_close: move |_| mode.set(None),
                    Field {
                        label: "Team Name",
                        target: "team-name",
                        Input {
                            id: "team-name",
                            value: form.read().team_name.clone(),
                            oninput: move |v| form.write().team_name = v,
                        }
                    }
                    footer {
                        class: "modal-footer",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| mode.set(None),
                            "Cancel"
                        }
                        Button {
                            disabled: busy,
                            onclick: submit,
                            if busy {
                                Spinner {}
                            }
                            if current == FormMode::Create { "Create" } else { "Update" }
                        }
                    }
                }
            }

            if let Some(name) = delete_name {
                ConfirmDialog {
                    message: format!("Are you sure you want to delete the team \"{name}\"? This action cannot be undone."),
                    busy,
                    on_cancel: move |_| deleting.write().cancel(),
                    on_confirm: confirm_delete,
                }
            }
        }
    }
}
