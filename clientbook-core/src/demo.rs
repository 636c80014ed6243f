//! Demo client fixture used when no record file is supplied.

use clientbook_model::{ClientStatus, ClientType, Record};

fn client(
    id: &str,
    name: &str,
    client_type: ClientType,
    email: &str,
    created_at: &str,
    updated_at: &str,
    status: ClientStatus,
) -> Record {
    Record {
        id: id.to_string(),
        name: name.to_string(),
        client_type,
        email: email.to_string(),
        created_at: created_at.to_string(),
        updated_at: updated_at.to_string(),
        status,
    }
}

/// Six demo clients, three individuals and three companies.
pub fn demo_records() -> Vec<Record> {
    use ClientStatus::*;
    use ClientType::*;

    vec![
        client(
            "cli_1",
            "Alice Johnson",
            Individual,
            "alice.j@email.com",
            "2023-01-15T10:00:00Z",
            "2023-05-20T14:30:00Z",
            Active,
        ),
        client(
            "cli_2",
            "Bob Williams",
            Company,
            "bob.w@company.com",
            "2022-11-01T09:15:00Z",
            "2023-06-10T11:00:00Z",
            Active,
        ),
        client(
            "cli_3",
            "Charlie Brown",
            Individual,
            "charlie.b@email.com",
            "2023-03-22T16:45:00Z",
            "2023-03-22T16:45:00Z",
            Pending,
        ),
        client(
            "cli_4",
            "Diana Davis",
            Company,
            "diana.d@enterprise.com",
            "2021-07-10T08:00:00Z",
            "2023-04-25T09:20:00Z",
            Inactive,
        ),
        client(
            "cli_5",
            "Ethan Garcia",
            Individual,
            "ethan.g@email.com",
            "2023-06-01T11:30:00Z",
            "2023-06-05T15:00:00Z",
            Active,
        ),
        client(
            "cli_6",
            "Fiona Miller",
            Company,
            "fiona.m@business.org",
            "2022-09-15T14:00:00Z",
            "2023-02-10T10:10:00Z",
            Active,
        ),
    ]
}
