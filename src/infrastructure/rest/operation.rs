/// Remote operations, each with the message shown when the backend gives none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListCommunities,
    GetCommunity,
    CreateCommunity,
    DeleteCommunity,
    CreatePlayer,
    DeletePlayer,
    CreateTeam,
    AddPlayersToTeam,
    RemovePlayersFromTeam,
    RenameTeam,
    DeleteTeam,
    ListParties,
    GetParty,
    CreateParty,
    EndParty,
    DeleteParty,
    Login,
    Register,
    CurrentUser,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListCommunities => "list_communities",
            Operation::GetCommunity => "get_community",
            Operation::CreateCommunity => "create_community",
            Operation::DeleteCommunity => "delete_community",
            Operation::CreatePlayer => "create_player",
            Operation::DeletePlayer => "delete_player",
            Operation::CreateTeam => "create_team",
            Operation::AddPlayersToTeam => "add_players_to_team",
            Operation::RemovePlayersFromTeam => "remove_players_from_team",
            Operation::RenameTeam => "rename_team",
            Operation::DeleteTeam => "delete_team",
            Operation::ListParties => "list_parties",
            Operation::GetParty => "get_party",
            Operation::CreateParty => "create_party",
            Operation::EndParty => "end_party",
            Operation::DeleteParty => "delete_party",
            Operation::Login => "login",
            Operation::Register => "register",
            Operation::CurrentUser => "current_user",
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::ListCommunities => "Failed to fetch communities",
            Operation::GetCommunity => "Failed to fetch community",
            Operation::CreateCommunity => "Failed to create community",
            Operation::DeleteCommunity => "Failed to delete community",
            Operation::CreatePlayer => "Failed to add player",
            Operation::DeletePlayer => "Failed to delete player",
            Operation::CreateTeam => "Failed to create team",
            Operation::AddPlayersToTeam => "Failed to add players to team",
            Operation::RemovePlayersFromTeam | Operation::RenameTeam => "Failed to update team",
            Operation::DeleteTeam => "Failed to delete team",
            Operation::ListParties => "Failed to fetch parties",
            Operation::GetParty => "Failed to fetch party",
            Operation::CreateParty => "Failed to create party",
            Operation::EndParty => "Failed to end party",
            Operation::DeleteParty => "Failed to delete party",
            Operation::Login => "Login failed",
            Operation::Register => "Registration failed",
            Operation::CurrentUser => "Failed to get user info",
        }
    }
}
